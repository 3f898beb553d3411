//! # users-service
//!
//! Minimal HTTP CRUD service for a single `user` resource backed by an
//! in-memory collection. Every response is wrapped in a uniform JSON
//! envelope (`{"success": bool, "message": string, "data"?: ...}`) and the
//! whole surface is six routes plus a liveness probe.
//!
//! ## Example
//!
//! ```rust,no_run
//! use users_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone());
//!     let app = routes::router(state);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

/// Commonly used types, re-exported for service binaries
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::models::{User, UserDraft};
    pub use crate::observability::init_tracing;
    pub use crate::responses::{Envelope, Payload};
    pub use crate::routes;
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::UserStore;
}
