//! Service metadata handler for the root path

use crate::responses::{ApiResponse, ServiceInfo};

/// Informational GET on `/`: version string plus endpoint descriptions
pub async fn service_info() -> ApiResponse {
    let info = ServiceInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "GET / - Service metadata".to_string(),
            "GET /users - List all users".to_string(),
            "GET /users/{id} - Get a user by id".to_string(),
            "POST /users - Create a new user".to_string(),
            "PUT /users/{id} - Update a user".to_string(),
            "DELETE /users/{id} - Delete a user".to_string(),
        ],
    };

    ApiResponse::ok("Welcome to the users API", info)
}
