//! Error types and HTTP response conversion
//!
//! Request-level failures (`BadRequest`, `NotFound`, `MethodNotAllowed`) are
//! normal outcomes: they are recovered locally and surfaced as a failure
//! envelope with the matching status code, never as a process failure. The
//! remaining variants only occur during bootstrap and propagate out of
//! `main`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::responses::Envelope;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed JSON, non-numeric id, or a missing required field
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The id has no matching record
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wrong HTTP verb for the route
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Status code this error maps to on the wire
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message placed in the failure envelope
    fn client_message(&self) -> String {
        match self {
            Error::BadRequest(msg) | Error::NotFound(msg) => msg.clone(),
            Error::MethodNotAllowed => "Method not allowed".to_string(),
            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                "Internal server error".to_string()
            }
            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope = Envelope::failure(self.client_message());
        (status, Json(envelope)).into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
