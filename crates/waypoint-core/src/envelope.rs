//! Uniform response envelope.
//!
//! Every endpoint answers with a [`ResponseEnvelope`], whether it succeeded or
//! failed, so clients parse a single schema. Envelopes are only built through
//! the factory functions below and are immutable afterwards, except that the
//! translation boundary attaches the request path once via
//! [`ResponseEnvelope::with_path`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::category::ErrorCategory;
use crate::error::{DomainError, SYSTEM_ERROR_MESSAGE};

/// Message of a success envelope when none is supplied.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully";

/// Top-level message of a failure envelope carrying more than one error.
pub const MULTIPLE_ERRORS_MESSAGE: &str = "Multiple validation errors";

/// Status reported by every success envelope.
pub const SUCCESS_STATUS: u16 = 200;

/// Returned when a failure envelope would have no error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a failure envelope requires at least one error message")]
pub struct EmptyErrorMessages;

/// A non-empty, ordered sequence of caller-facing error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMessages(Vec<String>);

impl ErrorMessages {
    /// Starts a sequence with its first message.
    pub fn new(first: impl Into<String>) -> Self {
        Self(vec![first.into()])
    }

    /// Appends a message after the existing ones.
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// The messages in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The first message recorded.
    #[must_use]
    pub fn first(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    /// The message a failure envelope shows at top level: the single
    /// message, or [`MULTIPLE_ERRORS_MESSAGE`] when there are several.
    #[must_use]
    pub fn headline(&self) -> &str {
        if self.0.len() > 1 {
            MULTIPLE_ERRORS_MESSAGE
        } else {
            self.first()
        }
    }

}

impl TryFrom<Vec<String>> for ErrorMessages {
    type Error = EmptyErrorMessages;

    fn try_from(messages: Vec<String>) -> Result<Self, Self::Error> {
        if messages.is_empty() {
            Err(EmptyErrorMessages)
        } else {
            Ok(Self(messages))
        }
    }
}

/// The response body shape shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ErrorMessages>,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_category: Option<ErrorCategory>,
}

impl<T> ResponseEnvelope<T> {
    fn succeeded(data: Option<T>, message: String) -> Self {
        Self {
            success: true,
            message,
            data,
            errors: None,
            timestamp: Utc::now(),
            path: None,
            status: SUCCESS_STATUS,
            error_category: None,
        }
    }

    /// A success envelope carrying `data` and the default message.
    pub fn success(data: T) -> Self {
        Self::succeeded(Some(data), DEFAULT_SUCCESS_MESSAGE.to_owned())
    }

    /// A success envelope carrying `data` and `message`.
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self::succeeded(Some(data), message.into())
    }

    /// A success envelope without data.
    #[must_use]
    pub fn completed() -> Self {
        Self::succeeded(None, DEFAULT_SUCCESS_MESSAGE.to_owned())
    }

    /// A success envelope without data, with `message`.
    pub fn completed_with_message(message: impl Into<String>) -> Self {
        Self::succeeded(None, message.into())
    }

    /// A failure envelope with a single error.
    pub fn error(message: impl Into<String>, status: u16, category: ErrorCategory) -> Self {
        Self::errors(ErrorMessages::new(message), status, category)
    }

    /// A failure envelope with every error in `messages`, in order.
    ///
    /// With more than one message the top-level message becomes
    /// [`MULTIPLE_ERRORS_MESSAGE`]. Categories that are not caller-safe
    /// replace every message with [`SYSTEM_ERROR_MESSAGE`].
    #[must_use]
    pub fn errors(messages: ErrorMessages, status: u16, category: ErrorCategory) -> Self {
        debug_assert!(
            (400..600).contains(&status),
            "failure envelope status must be 4xx or 5xx, got {status}"
        );
        let messages = if category.is_caller_safe() {
            messages
        } else {
            ErrorMessages::new(SYSTEM_ERROR_MESSAGE)
        };
        Self {
            success: false,
            message: messages.headline().to_owned(),
            data: None,
            errors: Some(messages),
            timestamp: Utc::now(),
            path: None,
            status,
            error_category: Some(category),
        }
    }

    /// The failure envelope for `error`, using its fixed category and status.
    ///
    /// Unclassified faults only ever contribute the generic system message.
    #[must_use]
    pub fn from_error(error: &DomainError) -> Self {
        Self::errors(error.messages(), error.status_code(), error.category())
    }

    /// Attaches the request path. The first path attached is kept.
    #[must_use]
    pub fn with_path(self, path: impl Into<String>) -> Self {
        if self.path.is_some() {
            return self;
        }
        Self {
            path: Some(path.into()),
            ..self
        }
    }

    /// Whether this envelope reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Top-level message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Payload of a success envelope.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error messages of a failure envelope.
    #[must_use]
    pub fn errors_list(&self) -> Option<&[String]> {
        self.errors.as_ref().map(ErrorMessages::as_slice)
    }

    /// Construction time.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Request path, once attached.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Transport status.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Category of a failure envelope.
    #[must_use]
    pub const fn error_category(&self) -> Option<ErrorCategory> {
        self.error_category
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use serde_json::json;

    use super::*;

    fn messages(items: &[&str]) -> ErrorMessages {
        ErrorMessages::try_from(items.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>())
            .unwrap()
    }

    #[test]
    fn test_success_envelope_carries_data_and_no_error_fields() {
        let envelope = ResponseEnvelope::success(42);

        assert!(envelope.is_success());
        assert_eq!(envelope.status(), 200);
        assert_eq!(envelope.data(), Some(&42));
        assert_eq!(envelope.message(), DEFAULT_SUCCESS_MESSAGE);
        assert!(envelope.errors_list().is_none());
        assert!(envelope.error_category().is_none());
    }

    #[test]
    fn test_success_with_message_overrides_default() {
        let envelope = ResponseEnvelope::success_with_message("x", "Place created");
        assert_eq!(envelope.message(), "Place created");
    }

    #[test]
    fn test_completed_has_no_data() {
        let envelope = ResponseEnvelope::<()>::completed_with_message("Place removed");

        assert!(envelope.is_success());
        assert!(envelope.data().is_none());
        assert_eq!(envelope.message(), "Place removed");
        assert_eq!(ResponseEnvelope::<()>::completed().message(), DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_multiple_errors_use_fixed_literal_and_keep_order() {
        let envelope =
            ResponseEnvelope::<()>::errors(messages(&["a", "b"]), 400, ErrorCategory::Validation)
                .with_path("/x");

        assert!(!envelope.is_success());
        assert_eq!(envelope.message(), "Multiple validation errors");
        assert_eq!(envelope.errors_list().unwrap(), ["a", "b"]);
        assert_eq!(envelope.status(), 400);
        assert_eq!(envelope.error_category(), Some(ErrorCategory::Validation));
        assert_eq!(envelope.path(), Some("/x"));
        assert!(envelope.data().is_none());
    }

    #[test]
    fn test_single_error_uses_message_verbatim() {
        let envelope =
            ResponseEnvelope::<()>::errors(messages(&["only"]), 404, ErrorCategory::NotFound)
                .with_path("/y");

        assert_eq!(envelope.message(), "only");
        assert_eq!(envelope.errors_list().unwrap(), ["only"]);
    }

    #[test]
    fn test_empty_messages_are_rejected() {
        assert_eq!(ErrorMessages::try_from(Vec::<String>::new()), Err(EmptyErrorMessages));
    }

    #[test]
    fn test_path_is_attached_only_once() {
        let envelope = ResponseEnvelope::<()>::error("nope", 409, ErrorCategory::Conflict)
            .with_path("/first")
            .with_path("/second");

        assert_eq!(envelope.path(), Some("/first"));
    }

    #[test]
    fn test_timestamps_do_not_decrease() {
        let first = ResponseEnvelope::success(1);
        let second = ResponseEnvelope::success(2);
        assert!(second.timestamp() >= first.timestamp());
    }

    #[test]
    fn test_from_error_uses_fixed_pair() {
        let envelope =
            ResponseEnvelope::<()>::from_error(&DomainError::resource_not_found("Place", 3));

        assert_eq!(envelope.status(), 404);
        assert_eq!(envelope.error_category(), Some(ErrorCategory::NotFound));
        assert_eq!(envelope.message(), "Place with id '3' not found");
    }

    #[test]
    fn test_system_envelope_omits_fault_text() {
        let fault = DomainError::unclassified(io::Error::other("SELECT * FROM secrets"));
        let envelope = ResponseEnvelope::<()>::from_error(&fault);

        assert_eq!(envelope.error_category(), Some(ErrorCategory::System));
        assert_eq!(envelope.status(), 500);
        assert!(!envelope.message().contains("secrets"));
        assert!(
            envelope
                .errors_list()
                .unwrap()
                .iter()
                .all(|m| !m.contains("secrets"))
        );
    }

    #[test]
    fn test_system_factory_replaces_caller_text() {
        let envelope = ResponseEnvelope::<()>::errors(
            messages(&["password=hunter2 at db.rs:42", "second"]),
            500,
            ErrorCategory::System,
        );

        assert_eq!(envelope.message(), SYSTEM_ERROR_MESSAGE);
        assert_eq!(envelope.errors_list().unwrap(), [SYSTEM_ERROR_MESSAGE]);

        let single =
            ResponseEnvelope::<()>::error("password=hunter2", 500, ErrorCategory::System);
        assert_eq!(single.message(), SYSTEM_ERROR_MESSAGE);
        assert!(!serde_json::to_string(&single).unwrap().contains("hunter2"));
    }

    #[test]
    #[should_panic(expected = "failure envelope status must be 4xx or 5xx")]
    #[cfg(debug_assertions)]
    fn test_failure_envelope_rejects_success_status() {
        let _ = ResponseEnvelope::<()>::error("bad", 200, ErrorCategory::Validation);
    }

    #[test]
    fn test_failure_json_shape() {
        let envelope =
            ResponseEnvelope::<()>::error("bad", 400, ErrorCategory::Validation).with_path("/p");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], json!(false));
        assert_eq!(json["message"], json!("bad"));
        assert_eq!(json["errors"], json!(["bad"]));
        assert_eq!(json["path"], json!("/p"));
        assert_eq!(json["status"], json!(400));
        assert_eq!(json["errorCategory"], json!("VALIDATION"));
        assert!(json["timestamp"].is_string());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_success_json_omits_error_fields() {
        let json = serde_json::to_value(ResponseEnvelope::success(json!({ "id": 1 }))).unwrap();

        assert_eq!(json["success"], json!(true));
        assert_eq!(json["data"]["id"], json!(1));
        assert!(json.get("errors").is_none());
        assert!(json.get("errorCategory").is_none());
        assert!(json.get("path").is_none());
    }
}
