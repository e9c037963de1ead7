//! Custom Axum extractors
//!
//! Both reject with `ApiError` so clients always get `{"error": ...}`
//! instead of axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract an integer user id from the `{id}` path segment
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ValidationError::InvalidId {
                value: String::new(),
            })?;

        let id = raw
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidId { value: raw })?;

        Ok(Self(id))
    }
}

/// JSON body that does not insist on a `Content-Type` header.
///
/// Any read or decode failure becomes `ValidationError::MalformedBody`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("failed to read request body: {}", e);
            ValidationError::MalformedBody
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!("failed to decode request body: {}", e);
            ValidationError::MalformedBody
        })?;

        Ok(Self(value))
    }
}
