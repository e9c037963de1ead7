//! Liveness probe. Does not touch the database.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

const HEALTHY: Health = Health {
    status: "ok",
    service: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn health() -> Json<Health> {
    Json(HEALTHY)
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
