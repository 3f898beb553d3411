//! Application state shared across handlers

use std::sync::Arc;

use crate::{config::Config, store::UserStore};

/// Shared state: configuration and the user store
///
/// Cloning is cheap; both members sit behind an `Arc`. The store is a
/// single instance per process, injected into handlers through axum's
/// `State` extractor rather than living in a global.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    store: Arc<UserStore>,
}

impl AppState {
    /// Create state with a freshly seeded store
    pub fn new(config: Config) -> Self {
        Self::with_store(config, UserStore::seeded())
    }

    /// Create state around an existing store
    pub fn with_store(config: Config, store: UserStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user store
    pub fn store(&self) -> &UserStore {
        &self.store
    }
}
