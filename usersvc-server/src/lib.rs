//! usersvc-server: users CRUD over HTTP
//!
//! Connects to PostgreSQL with bounded retries, ensures the `users` table,
//! and serves list/get/create/update/delete endpoints as JSON.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, PgUserStore, UserStore};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{User, UserInput};
