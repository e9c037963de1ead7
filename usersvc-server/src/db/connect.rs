//! Startup connection with bounded retries
//!
//! Attempt `i` (zero-based) that fails is followed by a sleep of
//! `base_delay * i²`: 0s, 1s, 4s, 9s, 16s with the default policy.
//! The delay after the last attempt is kept, so a fully failing startup
//! waits 30s before giving up.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

/// Default number of connection attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default backoff unit.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How many times to try and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay that follows a failure of the zero-based `attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(attempt.saturating_mul(attempt))
    }
}

/// Retry loop failure
#[derive(Debug, thiserror::Error)]
pub enum RetryError<E> {
    #[error("gave up after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: E },

    #[error("retry policy allows no attempts")]
    NoAttempts,
}

/// Run `op` until it succeeds or the policy runs out of attempts.
///
/// `op` receives the zero-based attempt index. Sleeps go through
/// `tokio::time`, so a paused test clock skips them.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut op: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut last_error = None;

    for attempt in 0..policy.max_attempts {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                let retry_in = policy.delay_for(attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_attempts = policy.max_attempts,
                    error = %err,
                    retry_in = ?retry_in,
                    "attempt failed"
                );
                last_error = Some(err);
                tokio::time::sleep(retry_in).await;
            }
        }
    }

    match last_error {
        Some(last_error) => Err(RetryError::Exhausted {
            attempts: policy.max_attempts,
            last_error,
        }),
        None => Err(RetryError::NoAttempts),
    }
}

/// Open a pool and verify it with a ping, retrying per `policy`.
///
/// # Example
///
/// ```ignore
/// let pool = connect_with_retry(&database_url, &RetryPolicy::default(), 5).await?;
/// ```
pub async fn connect_with_retry(
    database_url: &str,
    policy: &RetryPolicy,
    max_connections: u32,
) -> Result<PgPool, RetryError<sqlx::Error>> {
    retry_with_backoff(policy, |attempt| async move {
        let pool = connect_once(database_url, max_connections).await?;
        tracing::info!(attempt = attempt + 1, "database connection established");
        Ok::<_, sqlx::Error>(pool)
    })
    .await
}

async fn connect_once(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    drop(conn);

    Ok(pool)
}
