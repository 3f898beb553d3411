// Handler modules
pub mod health;
pub mod meta;
pub mod users;

// Re-export handlers for convenience
pub use health::health;
pub use meta::service_info;
pub use users::{create_user, delete_user, get_user, list_users, update_user};
