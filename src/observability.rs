//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize the tracing subscriber
///
/// Log level comes from the config (overridable via `RUST_LOG`); output is
/// JSON outside the dev environment, human-readable otherwise.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // try_init so a second call (e.g. from tests) is a no-op, not a panic
    let result = if config.service.environment == "dev" {
        builder.try_init()
    } else {
        builder.json().try_init()
    };
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }

    tracing::info!("Tracing initialized for service: {}", config.service.name);

    Ok(())
}
