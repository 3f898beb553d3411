//! users-service binary
//!
//! Thin bootstrap: load configuration, initialize tracing, seed the store,
//! and hand the router to the server.

use users_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config)?;

    let state = AppState::new(config.clone());
    let app = routes::router(state);

    Server::new(config).serve(app).await
}
