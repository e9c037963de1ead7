//! Validation error types
//!
//! Messages are the ones clients of this service already match on.

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not decodable JSON of the expected shape
    MalformedBody,

    /// A required field is empty or absent
    MissingFields,

    /// Path id is not an integer
    InvalidId { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody => write!(f, "Datos inválidos"),
            Self::MissingFields => write!(f, "Nombre y email son requeridos"),
            Self::InvalidId { value } => write!(f, "id inválido: {}", value),
        }
    }
}

impl std::error::Error for ValidationError {}
