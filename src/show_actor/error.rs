//! Error types for the Show actor.

use thiserror::Error;

/// Errors that can occur during show operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShowError {
    /// No show is stored under the requested id.
    #[error("Show not found: {0}")]
    NotFound(String),

    /// The create payload failed validation.
    #[error("Show validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ShowError {
    fn from(msg: String) -> Self {
        ShowError::ActorCommunicationError(msg)
    }
}
