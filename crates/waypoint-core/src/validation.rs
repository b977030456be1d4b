//! Aggregated input validation.

use crate::envelope::{EmptyErrorMessages, ErrorMessages};
use crate::error::DomainError;

/// Collects rule violations in the order they are detected.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    /// An empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Records `message` unless `condition` holds.
    pub fn require(&mut self, condition: bool, message: impl Into<String>) {
        if !condition {
            self.push(message);
        }
    }

    /// `Ok(())` if nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FieldViolations` listing every recorded
    /// violation in detection order.
    pub fn into_result(self) -> Result<(), DomainError> {
        match ErrorMessages::try_from(self.0) {
            Ok(messages) => Err(DomainError::field_violations(messages)),
            Err(EmptyErrorMessages) => Ok(()),
        }
    }
}
