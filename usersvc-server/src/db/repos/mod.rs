//! Store implementations for database access
//!
//! Each store method is exactly one round trip:
//! - No check-then-write; UNIQUE violations come back from the database
//! - update/delete do not look for the row first

pub mod users;

#[cfg(test)]
pub(crate) mod memory;

pub use users::{DbError, PgUserStore, UserStore};
