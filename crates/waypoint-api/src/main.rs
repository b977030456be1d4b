//! Waypoint API server entry point.

use std::error::Error;
use std::sync::Arc;

use waypoint_api::config::ApiConfig;
use waypoint_api::state::AppState;
use waypoint_api::telemetry;
use waypoint_store::MemoryPlaceRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = ApiConfig::from_env()?;

    // Initialize tracing subscriber; export spans while the guard lives.
    let _telemetry = telemetry::init(&config)?;

    tracing::info!("Starting Waypoint API server");

    // Build application state.
    let app_state = AppState::new(
        Arc::new(MemoryPlaceRepository::new()),
        config.tokens.clone(),
    );
    let app = waypoint_api::app(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Waypoint API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
