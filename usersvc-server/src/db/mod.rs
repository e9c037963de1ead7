//! Database layer - connection establishment, schema, and the user store
//!
//! # Design Principles
//!
//! - One shared `PgPool`, no Arc<Mutex<Connection>>
//! - Startup connection is the only retried operation
//! - Every store call is a single statement, no transactions
//! - Rely on DB constraints (UNIQUE email), surface their errors as-is

pub mod connect;
pub mod repos;
pub mod schema;

pub use connect::{connect_with_retry, retry_with_backoff, RetryError, RetryPolicy};
pub use repos::{DbError, PgUserStore, UserStore};
pub use schema::run_migrations;
