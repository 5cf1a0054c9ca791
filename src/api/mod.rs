//! HTTP surface: routes, the response envelope, and handler errors.

pub mod envelope;
pub mod error;
pub mod routes;

pub use envelope::{create_response, Envelope, EnvelopeError, Reply};
pub use error::ApiError;
pub use routes::router;
