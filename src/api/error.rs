//! Errors surfaced by the HTTP handlers.
//!
//! Each variant renders as an [`Envelope`] with `result: null`. Validation and
//! not-found failures carry a client-facing message; everything else is reported as a
//! generic server error and logged.

use super::envelope::{Envelope, EnvelopeError};
use crate::show_actor::ShowError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

pub const VALIDATION_MESSAGE: &str =
    "Error, make sure you include name and episodes seen of the TV show";
pub const NOT_FOUND_MESSAGE: &str = "No show with this id exists";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// Body or path could not be parsed into the expected shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("store unavailable: {0}")]
    Store(String),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MalformedInput(_)
            | ApiError::Store(_)
            | ApiError::Envelope(_)
            | ApiError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShowError> for ApiError {
    fn from(err: ShowError) -> Self {
        match err {
            ShowError::NotFound(_) => ApiError::NotFound,
            ShowError::Validation(_) => ApiError::Validation,
            ShowError::ActorCommunicationError(msg) => ApiError::Store(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Validation | ApiError::NotFound => self.to_string(),
            ApiError::MalformedInput(_) => {
                warn!(error = %self, "Rejected request");
                INTERNAL_MESSAGE.to_string()
            }
            _ => {
                error!(error = %self, "Request failed");
                INTERNAL_MESSAGE.to_string()
            }
        };
        (status, Json(Envelope::without_result(status, message))).into_response()
    }
}
