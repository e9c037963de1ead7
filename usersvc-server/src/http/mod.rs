//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS, preflight answered by middleware
//! - JSON content type on every response
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
