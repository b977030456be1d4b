//! Domain error types.
//!
//! Every failure raised by business logic is a [`DomainError`]. Each variant
//! carries its own data (a message and an optional cause) and is bound to a
//! fixed [`ErrorCategory`] and transport status that callers cannot override.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::category::ErrorCategory;
use crate::envelope::ErrorMessages;

/// Boxed underlying fault kept for diagnostics.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Message shown to callers for every `SYSTEM` failure.
pub const SYSTEM_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed a single validation rule.
    #[error("{message}")]
    Validation {
        /// Caller-safe description of the violation.
        message: String,
        /// Underlying fault, if the violation was detected by a parser.
        #[source]
        cause: Option<BoxError>,
    },

    /// Input failed one or more validation rules, reported together.
    #[error("{}", .violations.headline())]
    FieldViolations {
        /// Violations in the order they were detected.
        violations: ErrorMessages,
    },

    /// A sort parameter named a field outside the allow-list.
    #[error("{message}")]
    InvalidSortField {
        /// The rejected field name.
        field: String,
        /// The authoritative allow-list, in the order supplied.
        allowed: Vec<String>,
        /// Message enumerating both.
        message: String,
    },

    /// The caller could not be identified.
    #[error("{message}")]
    Unauthenticated {
        /// Caller-safe description.
        message: String,
        /// Underlying fault.
        #[source]
        cause: Option<BoxError>,
    },

    /// The caller is identified but lacks permission.
    #[error("{message}")]
    Unauthorized {
        /// Caller-safe description.
        message: String,
        /// Underlying fault.
        #[source]
        cause: Option<BoxError>,
    },

    /// The addressed resource does not exist.
    #[error("{message}")]
    ResourceNotFound {
        /// Caller-safe description.
        message: String,
        /// Underlying fault.
        #[source]
        cause: Option<BoxError>,
    },

    /// The request conflicts with current state.
    #[error("{message}")]
    Conflict {
        /// Caller-safe description.
        message: String,
        /// Underlying fault.
        #[source]
        cause: Option<BoxError>,
    },

    /// A business rule rejected an otherwise valid request.
    #[error("{message}")]
    Business {
        /// Caller-safe description.
        message: String,
        /// Underlying fault.
        #[source]
        cause: Option<BoxError>,
    },

    /// Any fault that is not a classified domain failure.
    ///
    /// The fault is kept for logging; its text never reaches the caller.
    #[error("{}", SYSTEM_ERROR_MESSAGE)]
    Unclassified {
        /// The original fault.
        #[source]
        cause: BoxError,
    },
}

impl DomainError {
    /// A single validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            cause: None,
        }
    }

    /// A validation failure detected while handling `cause`.
    pub fn validation_with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::Validation {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Several validation failures reported as one error.
    #[must_use]
    pub fn field_violations(violations: ErrorMessages) -> Self {
        Self::FieldViolations { violations }
    }

    /// Documents the rejection of `field`, which the caller has already found
    /// missing from `allowed`.
    pub fn invalid_sort_field<I, S>(field: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field = field.into();
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let message = format!(
            "Invalid sort field: '{field}'. Allowed fields: [{}]",
            allowed.join(", ")
        );
        Self::InvalidSortField {
            field,
            allowed,
            message,
        }
    }

    /// The caller could not be identified.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
            cause: None,
        }
    }

    /// Authentication failed because of `cause`.
    pub fn unauthenticated_with_cause(
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::Unauthenticated {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// The caller lacks permission.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            cause: None,
        }
    }

    /// Permission was denied because of `cause`.
    pub fn unauthorized_with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// A missing resource described in free text.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            message: message.into(),
            cause: None,
        }
    }

    /// A missing resource described in free text, with the lookup fault.
    pub fn not_found_with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::ResourceNotFound {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// A missing resource identified by type and id.
    ///
    /// The message reads `"{resource_type} with id '{id}' not found"`.
    pub fn resource_not_found(resource_type: &str, id: impl fmt::Display) -> Self {
        Self::not_found(format!("{resource_type} with id '{id}' not found"))
    }

    /// The request conflicts with current state.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            cause: None,
        }
    }

    /// A conflict reported by `cause`, e.g. a unique-key violation.
    pub fn conflict_with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::Conflict {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// A business rule forbids the request.
    pub fn business(message: impl Into<String>) -> Self {
        Self::Business {
            message: message.into(),
            cause: None,
        }
    }

    /// A business rule violation surfaced by `cause`.
    pub fn business_with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::Business {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Wraps a fault that has no domain classification.
    pub fn unclassified(cause: impl Into<BoxError>) -> Self {
        Self::Unclassified {
            cause: cause.into(),
        }
    }

    /// The category fixed for this variant.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. }
            | Self::FieldViolations { .. }
            | Self::InvalidSortField { .. } => ErrorCategory::Validation,
            Self::Unauthenticated { .. } => ErrorCategory::Authentication,
            Self::Unauthorized { .. } => ErrorCategory::Permission,
            Self::ResourceNotFound { .. } => ErrorCategory::NotFound,
            Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::Business { .. } => ErrorCategory::BusinessRule,
            Self::Unclassified { .. } => ErrorCategory::System,
        }
    }

    /// The transport status fixed for this variant.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. }
            | Self::FieldViolations { .. }
            | Self::InvalidSortField { .. } => 400,
            Self::Unauthenticated { .. } => 401,
            Self::Unauthorized { .. } => 403,
            Self::ResourceNotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Business { .. } => 422,
            Self::Unclassified { .. } => 500,
        }
    }

    /// The caller-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::InvalidSortField { message, .. }
            | Self::Unauthenticated { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::ResourceNotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Business { message, .. } => message,
            Self::FieldViolations { violations } => violations.headline(),
            Self::Unclassified { .. } => SYSTEM_ERROR_MESSAGE,
        }
    }

    /// The underlying fault, if one was recorded.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Validation { cause, .. }
            | Self::Unauthenticated { cause, .. }
            | Self::Unauthorized { cause, .. }
            | Self::ResourceNotFound { cause, .. }
            | Self::Conflict { cause, .. }
            | Self::Business { cause, .. } => cause.as_deref(),
            Self::Unclassified { cause } => Some(cause.as_ref()),
            Self::FieldViolations { .. } | Self::InvalidSortField { .. } => None,
        }
    }

    /// The `errors` list a failure envelope reports for this error.
    #[must_use]
    pub fn messages(&self) -> ErrorMessages {
        match self {
            Self::FieldViolations { violations } => violations.clone(),
            other => ErrorMessages::new(other.message()),
        }
    }
}
