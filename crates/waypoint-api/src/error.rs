//! Waypoint API — error types and the translation boundary.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use waypoint_core::envelope::ResponseEnvelope;
use waypoint_core::error::{BoxError, DomainError};

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Telemetry exporter or subscriber setup failed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// A failure envelope whose request path is not yet known.
///
/// `ApiError` leaves one in the response extensions; the path middleware
/// attaches the path and re-serializes the body.
#[derive(Debug, Clone)]
pub struct PendingEnvelope(pub ResponseEnvelope<()>);

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    /// Wraps a fault with no domain classification.
    pub fn fault(err: impl Into<BoxError>) -> Self {
        Self(DomainError::unclassified(err))
    }

    /// Transport status for the wrapped error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// The `(status, envelope)` pair this error translates to.
    #[must_use]
    pub fn to_parts(&self) -> (StatusCode, ResponseEnvelope<()>) {
        (self.status(), ResponseEnvelope::from_error(&self.0))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::validation_with_cause(
            rejection.body_text(),
            rejection,
        ))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(DomainError::validation_with_cause(
            rejection.body_text(),
            rejection,
        ))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DomainError::validation_with_cause(
            rejection.body_text(),
            rejection,
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = self.to_parts();
        let category = self.0.category();

        if !category.is_caller_safe() {
            error!(
                status = status.as_u16(),
                cause = ?self.0.cause().map(ToString::to_string),
                "unclassified fault"
            );
        } else {
            warn!(
                status = status.as_u16(),
                category = %category,
                message = self.0.message(),
                "request rejected"
            );
        }

        let mut response = (status, Json(&envelope)).into_response();
        response.extensions_mut().insert(PendingEnvelope(envelope));
        response
    }
}

/// Success responder: serializes a `ResponseEnvelope` with its own status.
#[derive(Debug)]
pub struct Envelope<T>(pub ResponseEnvelope<T>);

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::OK);
        (status, Json(self.0)).into_response()
    }
}
