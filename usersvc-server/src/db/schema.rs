//! Schema setup
//!
//! A single idempotent CREATE TABLE; there is no migration history.

use sqlx::PgPool;
use tracing::info;

/// Ensure the `users` table exists.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("database migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect_with_retry, RetryPolicy};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect_with_retry(&url, &RetryPolicy::default(), 2)
            .await
            .expect("connection failed");

        run_migrations(&pool).await.expect("first run failed");
        run_migrations(&pool).await.expect("second run failed");

        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'users')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");

        assert!(exists);
    }
}
