//! Sort parameter parsing against an allow-list.
//!
//! Raw field names from a request never reach ordering code: parsing maps
//! an accepted name to a typed key and rejects everything else with
//! [`DomainError::InvalidSortField`].

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::DomainError;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Orients an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(DomainError::validation(format!(
                "Invalid sort direction: '{raw}'. Allowed directions: [asc, desc]"
            )))
        }
    }
}

/// A validated sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    field: F,
    direction: SortDirection,
}

impl<F: Copy> SortOrder<F> {
    /// Builds an order from an already-typed key.
    pub const fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses `"field"` or `"field,asc|desc"`.
    ///
    /// `fields` is the authoritative allow-list of `(name, key)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSortField` if the field is not in
    /// `fields`, or `DomainError::Validation` if the direction is neither
    /// `asc` nor `desc`.
    pub fn parse(raw: &str, fields: &[(&str, F)]) -> Result<Self, DomainError> {
        let (name, direction) = match raw.split_once(',') {
            Some((name, direction)) => (name.trim(), SortDirection::parse(direction.trim())?),
            None => (raw.trim(), SortDirection::default()),
        };

        let field = fields
            .iter()
            .find(|(allowed, _)| *allowed == name)
            .map(|(_, key)| *key)
            .ok_or_else(|| {
                DomainError::invalid_sort_field(name, fields.iter().map(|(allowed, _)| *allowed))
            })?;

        Ok(Self { field, direction })
    }

    /// The sort key.
    #[must_use]
    pub fn field(&self) -> F {
        self.field
    }

    /// The sort direction.
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}
