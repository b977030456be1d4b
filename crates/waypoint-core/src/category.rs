//! Client-facing error categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed classification attached to every failure envelope.
///
/// Clients show `message`/`errors` verbatim for every category except
/// [`ErrorCategory::System`], which always carries a generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Malformed or out-of-range input.
    Validation,
    /// A well-formed request that a business rule forbids.
    BusinessRule,
    /// The addressed resource does not exist.
    NotFound,
    /// The request collides with current resource state.
    Conflict,
    /// The caller could not be identified.
    Authentication,
    /// The caller is identified but not allowed to act.
    Permission,
    /// An unexpected internal fault.
    System,
}

impl ErrorCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Validation,
        Self::BusinessRule,
        Self::NotFound,
        Self::Conflict,
        Self::Authentication,
        Self::Permission,
        Self::System,
    ];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::BusinessRule => "BUSINESS_RULE",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Authentication => "AUTHENTICATION",
            Self::Permission => "PERMISSION",
            Self::System => "SYSTEM",
        }
    }

    /// Whether messages in this category may be shown to the caller as-is.
    #[must_use]
    pub const fn is_caller_safe(self) -> bool {
        !matches!(self, Self::System)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
