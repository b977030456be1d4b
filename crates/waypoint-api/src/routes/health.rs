//! Health check endpoint.

use axum::{Router, routing::get};
use serde::Serialize;
use waypoint_core::envelope::ResponseEnvelope;

use crate::error::Envelope;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /health
async fn health_check() -> Envelope<HealthResponse> {
    Envelope(ResponseEnvelope::success(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    }))
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
