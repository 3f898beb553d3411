//! Route table
//!
//! Explicit (method, pattern) → handler entries. Wrong verbs on a known
//! path and unknown paths both answer with the failure envelope instead of
//! axum's bare default responses.

use axum::{routing::get, Router};

use crate::error::Error;
use crate::handlers;
use crate::state::AppState;

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(unknown_route)
        .with_state(state)
}

async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

async fn unknown_route() -> Error {
    Error::NotFound("Resource not found".to_string())
}
