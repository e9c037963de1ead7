//! User endpoints
//!
//! Each handler makes exactly one store call. Update and delete do not
//! check that the row exists: a missing id still answers 200.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, UserId};
use crate::http::server::AppState;
use crate::models::{User, UserInput};

const USER_DELETED: &str = "Usuario eliminado";

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = state.store.get(id).await?;
    Ok(Json(user))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    input.validate()?;
    let user = state.store.create(&input).await?;
    tracing::info!(id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id} - overwrite name and email
///
/// Responds with the submitted values under the path id.
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<Json<User>, ApiError> {
    let touched = state.store.update(id, &input).await?;
    if touched == 0 {
        tracing::debug!(id, "update matched no rows");
    }

    Ok(Json(input.into_user(id)))
}

/// DELETE /users/{id} - remove a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let touched = state.store.delete(id).await?;
    if touched == 0 {
        tracing::debug!(id, "delete matched no rows");
    }

    Ok(Json(DeleteResponse {
        message: USER_DELETED,
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
