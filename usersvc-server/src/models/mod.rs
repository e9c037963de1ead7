//! Domain models
//!
//! Request bodies are checked for presence only; the store enforces the rest
//! (NOT NULL, UNIQUE on email).

pub mod user;
pub mod validation;

pub use user::{User, UserInput};
pub use validation::ValidationError;
