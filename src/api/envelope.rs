//! # Response Envelope
//!
//! Every response body, success or failure, has the same shape:
//!
//! ```json
//! { "code": 201, "success": true, "message": "", "result": { "shows": { ... } } }
//! ```
//!
//! - `success` is derived from `code` (`200 <= code < 300`), never passed in.
//! - `result` is either `null` or an object with a single key naming the resource type.
//!
//! Handlers build a [`Reply`]; it is turned into an [`Envelope`] only when axum renders
//! the response.

use super::error::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The wire format of every response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub result: Option<Value>,
}

/// Raised when an envelope is asked to carry a result that is not a JSON object.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("envelope result must be an object keyed by resource type, got {0}")]
    NotAMapping(&'static str),
}

impl Envelope {
    /// Builds an envelope, rejecting `data` that is present but not an object.
    pub fn new(
        data: Option<Value>,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Result<Self, EnvelopeError> {
        if let Some(value) = &data {
            if !value.is_object() {
                return Err(EnvelopeError::NotAMapping(json_kind(value)));
            }
        }
        Ok(Self {
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result: data,
        })
    }

    /// An envelope with no result, as used for every error reply.
    pub fn without_result(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result: None,
        }
    }
}

/// Wraps an outcome in the envelope and pairs it with its status code.
pub fn create_response(
    data: Option<Value>,
    status: StatusCode,
    message: impl Into<String>,
) -> Result<(StatusCode, Json<Envelope>), EnvelopeError> {
    let envelope = Envelope::new(data, status, message)?;
    Ok((status, Json(envelope)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A successful handler outcome, rendered into an [`Envelope`] by axum.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    status: StatusCode,
    message: String,
    result: Option<(&'static str, Value)>,
}

impl Default for Reply {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            message: String::new(),
            result: None,
        }
    }
}

impl Reply {
    /// A `200 OK` reply with an empty message and no result.
    pub fn ok() -> Self {
        Self::default()
    }

    /// A `200 OK` reply whose result is `{ key: data }`.
    pub fn with_result<T: Serialize>(key: &'static str, data: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(data)?;
        Ok(Self {
            result: Some((key, value)),
            ..Self::default()
        })
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Converts the reply into the wire envelope.
    pub fn into_envelope(self) -> Result<(StatusCode, Json<Envelope>), EnvelopeError> {
        let data = self.result.map(|(key, value)| {
            let mut map = Map::new();
            map.insert(key.to_string(), value);
            Value::Object(map)
        });
        create_response(data, self.status, self.message)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.into_envelope() {
            Ok(response) => response.into_response(),
            Err(e) => ApiError::from(e).into_response(),
        }
    }
}
