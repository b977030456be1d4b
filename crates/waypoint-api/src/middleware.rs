//! Translation-boundary middleware: request paths, panics, unmatched routes
//! and unsupported methods.

use std::any::Any;

use axum::Json;
use axum::extract::Request;
use axum::http::{Method, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use waypoint_core::error::DomainError;

use crate::error::{ApiError, PendingEnvelope};

/// A handler panicked; carries the panic payload text for logging.
#[derive(Debug, Error)]
#[error("handler panicked: {0}")]
pub struct HandlerPanic(pub String);

/// Attaches the request path to any failure envelope produced downstream
/// and re-serializes the body. Success responses pass through untouched.
pub async fn attach_request_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<PendingEnvelope>() {
        Some(PendingEnvelope(envelope)) => {
            let (parts, _) = response.into_parts();
            (parts, Json(envelope.with_path(path))).into_response()
        }
        None => response,
    }
}

/// Turns a caught panic into a `SYSTEM` envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };

    ApiError::fault(HandlerPanic(detail)).into_response()
}

/// Fallback for requests no route matches.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError(DomainError::not_found(format!(
        "No resource found at '{}'",
        uri.path()
    )))
}

/// Fallback for a known path requested with a method it does not support.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError(DomainError::validation(format!(
        "Method {method} is not supported at '{}'",
        uri.path()
    )))
}
