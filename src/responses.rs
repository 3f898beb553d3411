//! Uniform response envelope
//!
//! Every endpoint answers with the same wrapper: a success flag, a
//! human-readable message, and an optional payload. `data` is omitted
//! entirely (not null) when there is nothing to return. The payload is a
//! closed union rather than an open-ended value, so each endpoint's shape is
//! explicit in the type system while the wire format stays a plain JSON
//! object.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::User;

/// Static service metadata served at the root path
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    /// Service version string
    pub version: String,
    /// Human-readable endpoint descriptions
    pub endpoints: Vec<String>,
}

/// Envelope payload: one user, a user listing, or service metadata
///
/// Serialized untagged; the variant never appears on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Payload {
    User(User),
    Users(Vec<User>),
    ServiceInfo(ServiceInfo),
}

impl From<User> for Payload {
    fn from(user: User) -> Self {
        Payload::User(user)
    }
}

impl From<Vec<User>> for Payload {
    fn from(users: Vec<User>) -> Self {
        Payload::Users(users)
    }
}

impl From<ServiceInfo> for Payload {
    fn from(info: ServiceInfo) -> Self {
        Payload::ServiceInfo(info)
    }
}

/// The uniform response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
}

impl Envelope {
    /// Success envelope with a payload
    pub fn success(message: impl Into<String>, data: impl Into<Payload>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data.into()),
        }
    }

    /// Success envelope with no payload (delete)
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failure envelope; never carries a payload
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// An envelope paired with its status code
///
/// Handlers return this instead of writing to the response directly, keeping
/// the status-code policy next to the envelope it describes.
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    envelope: Envelope,
}

impl ApiResponse {
    /// 200 OK with a payload
    pub fn ok(message: impl Into<String>, data: impl Into<Payload>) -> Self {
        Self {
            status: StatusCode::OK,
            envelope: Envelope::success(message, data),
        }
    }

    /// 200 OK with no payload
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            envelope: Envelope::success_empty(message),
        }
    }

    /// 201 Created with the stored record
    pub fn created(message: impl Into<String>, data: impl Into<Payload>) -> Self {
        Self {
            status: StatusCode::CREATED,
            envelope: Envelope::success(message, data),
        }
    }

    /// Status code this response carries
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The wrapped envelope
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
