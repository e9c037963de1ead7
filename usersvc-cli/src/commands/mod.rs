//! Command implementations for the usersvc CLI

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use usersvc_server::db::{connect, connect_with_retry, run_migrations, RetryPolicy};
use sqlx::PgPool;

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection settings shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Connection attempts before giving up at startup
    #[arg(long, env = "USERSVC_CONNECT_ATTEMPTS", default_value_t = connect::DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Backoff unit in milliseconds; attempt i waits unit * i² after failing
    #[arg(long, env = "USERSVC_RETRY_BASE_MS", default_value_t = 1000)]
    pub retry_base_ms: u64,

    /// Maximum connections in the pool
    #[arg(long, env = "USERSVC_MAX_CONNECTIONS", default_value_t = connect::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.retry_base_ms))
    }

    /// Connect with retries and make sure the users table exists.
    pub async fn connect_and_migrate(&self) -> Result<PgPool> {
        let pool = connect_with_retry(
            &self.database_url,
            &self.retry_policy(),
            self.max_connections,
        )
        .await
        .context("Failed to connect to PostgreSQL")?;

        run_migrations(&pool)
            .await
            .context("Failed to create users table")?;

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_policy_from_args() {
        let args = DatabaseArgs {
            database_url: "postgres://localhost/users".into(),
            max_attempts: 3,
            retry_base_ms: 250,
            max_connections: 2,
        };

        let policy = args.retry_policy();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay_for(2), Duration::from_secs(1));
    }
}
