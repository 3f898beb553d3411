//! HTTP server with middleware assembly and graceful shutdown

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, error::Result};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the server with the given router
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.service.port));

        tracing::info!("Starting {} on {}", self.config.service.name, addr);

        let app = apply_middleware(&self.config, app);

        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Wrap the router in the cross-cutting layers
///
/// Composed outer-to-inner: CORS (also answers cross-origin pre-flights with
/// an empty 200 before any handler runs) → body size limit → timeout →
/// request logging with latency → panic recovery.
pub fn apply_middleware(config: &Config, app: Router) -> Router {
    let app = app
        .layer(cors_layer(config))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes()))
        .layer(TimeoutLayer::new(config.timeout()))
        .layer(TraceLayer::new_for_http());

    if config.middleware.catch_panic {
        app.layer(CatchPanicLayer::new())
    } else {
        app
    }
}

/// Build the CORS layer based on configuration
///
/// Permissive mode answers every origin with `*` and allows all methods and
/// headers for cross-origin calls.
fn cors_layer(config: &Config) -> CorsLayer {
    match config.middleware.cors_mode.as_str() {
        "permissive" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        "disabled" => CorsLayer::new(),
        other => {
            tracing::warn!("Unknown CORS mode: {}, defaulting to permissive", other);
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
