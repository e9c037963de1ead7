//! User store
//!
//! The trait is the seam the HTTP layer depends on; `PgUserStore` is the
//! PostgreSQL implementation used in production.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{User, UserInput};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: user '{id}'")]
    NotFound { id: i32 },
}

/// Operations on the `users` table.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// All rows, in whatever order the database returns them.
    async fn list(&self) -> Result<Vec<User>, DbError>;

    /// One row, or `DbError::NotFound`.
    async fn get(&self, id: i32) -> Result<User, DbError>;

    /// Insert and return the row with its assigned id.
    async fn create(&self, input: &UserInput) -> Result<User, DbError>;

    /// Overwrite name and email. Returns the number of rows touched.
    async fn update(&self, id: i32, input: &UserInput) -> Result<u64, DbError>;

    /// Remove a row. Returns the number of rows touched.
    async fn delete(&self, id: i32) -> Result<u64, DbError>;
}

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }

    async fn create(&self, input: &UserInput) -> Result<User, DbError> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
                .bind(&input.name)
                .bind(&input.email)
                .fetch_one(&self.pool)
                .await?;

        Ok(input.clone().into_user(id))
    }

    async fn update(&self, id: i32, input: &UserInput) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(&input.name)
            .bind(&input.email)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect_with_retry, run_migrations, RetryPolicy};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p usersvc-server -- --ignored

    async fn store() -> PgUserStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect_with_retry(&url, &RetryPolicy::default(), 2)
            .await
            .expect("connection failed");
        run_migrations(&pool).await.expect("migrations failed");
        PgUserStore::new(pool)
    }

    fn unique_email(tag: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        format!("{tag}-{nanos}@example.test")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let store = store().await;
        let input = UserInput::new("Ana", unique_email("ana"));

        let created = store.create(&input).await.unwrap();
        assert!(created.id > 0);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);

        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_email_is_a_database_error() {
        let store = store().await;
        let input = UserInput::new("Ana", unique_email("dup"));

        let first = store.create(&input).await.unwrap();
        let err = store.create(&input).await.unwrap_err();

        assert!(matches!(err, DbError::Sqlx(sqlx::Error::Database(_))));
        assert!(err.to_string().contains("unique"));

        store.delete(first.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_rows_touch_nothing() {
        let store = store().await;
        let input = UserInput::new("Nadie", unique_email("ghost"));

        assert_eq!(store.update(i32::MAX, &input).await.unwrap(), 0);
        assert_eq!(store.delete(i32::MAX).await.unwrap(), 0);
        assert!(matches!(
            store.get(i32::MAX).await,
            Err(DbError::NotFound { id: i32::MAX })
        ));
    }
}
