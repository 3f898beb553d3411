//! HTTP handlers for the users resource
//!
//! Each handler parses its input, calls the store, and builds the envelope;
//! the store itself never sees HTTP. The id path segment arrives as a raw
//! string so that a malformed id is reported by the handler as a bad
//! request rather than aborting routing.

use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;

use crate::error::{Error, Result};
use crate::models::UserDraft;
use crate::responses::ApiResponse;
use crate::state::AppState;

/// Request body extraction, with decode failures folded into the taxonomy
type DraftBody = std::result::Result<Json<UserDraft>, JsonRejection>;

fn parse_id(raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| Error::BadRequest("Invalid user id".to_string()))
}

fn not_found() -> Error {
    Error::NotFound("User not found".to_string())
}

fn invalid_body(rejection: JsonRejection) -> Error {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    Error::BadRequest("Invalid JSON body".to_string())
}

/// List all users in insertion order
pub async fn list_users(State(state): State<AppState>) -> ApiResponse {
    let users = state.store().list();
    tracing::debug!(count = users.len(), "Listing users");
    ApiResponse::ok("Users retrieved successfully", users)
}

/// Get a user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse> {
    let id = parse_id(&id)?;
    let user = state.store().get(id).ok_or_else(not_found)?;
    Ok(ApiResponse::ok("User found", user))
}

/// Create a new user
///
/// The stored record comes back with its assigned id and creation
/// timestamp.
pub async fn create_user(State(state): State<AppState>, body: DraftBody) -> Result<ApiResponse> {
    let Json(draft) = body.map_err(invalid_body)?;
    draft.validate().map_err(Error::BadRequest)?;

    let user = state.store().insert(draft);
    tracing::info!(id = user.id, "User created");
    Ok(ApiResponse::created("User created successfully", user))
}

/// Replace a user's fields wholesale, keeping id and created_at
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: DraftBody,
) -> Result<ApiResponse> {
    let id = parse_id(&id)?;
    let Json(draft) = body.map_err(invalid_body)?;

    // Required-field presence is checked on create only; replacement
    // accepts empty values (documented quirk, see DESIGN.md)
    let user = state.store().replace(id, draft).ok_or_else(not_found)?;
    tracing::info!(id = user.id, "User updated");
    Ok(ApiResponse::ok("User updated successfully", user))
}

/// Delete a user by id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse> {
    let id = parse_id(&id)?;
    if !state.store().delete(id) {
        return Err(not_found());
    }
    tracing::info!(id, "User deleted");
    Ok(ApiResponse::ok_empty("User deleted successfully"))
}
