//! User record and request body

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A row of the `users` table.
///
/// `id` is assigned by the store (SERIAL) and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// Absent fields decode as empty strings so that `{}` reaches the presence
/// check instead of failing as malformed JSON. Extra fields (including `id`)
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Both fields must be non-empty. Only create enforces this.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    /// Attach an id, producing the record as the client submitted it.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
