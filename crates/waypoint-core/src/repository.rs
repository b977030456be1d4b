//! Place repository abstraction.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;
use crate::sort::SortOrder;

/// Resource type name used in not-found messages.
pub const PLACE_RESOURCE: &str = "Place";

/// Stored representation of a place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Unique place identifier.
    pub place_id: Uuid,
    /// Display name, unique across places.
    pub name: String,
    /// Free-form category, e.g. "cafe".
    pub category: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Landmarks are protected from removal.
    pub landmark: bool,
}

/// Fields a place listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceSortKey {
    /// Order by name.
    Name,
    /// Order by category.
    Category,
    /// Order by latitude.
    Latitude,
    /// Order by longitude.
    Longitude,
}

impl PlaceSortKey {
    /// The sort allow-list: accepted query names and their keys.
    pub const FIELDS: [(&'static str, Self); 4] = [
        ("name", Self::Name),
        ("category", Self::Category),
        ("latitude", Self::Latitude),
        ("longitude", Self::Longitude),
    ];

    /// Ascending comparison of two places on this key, ties broken by id.
    #[must_use]
    pub fn compare(self, a: &Place, b: &Place) -> Ordering {
        let primary = match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Category => a.category.cmp(&b.category),
            Self::Latitude => a.latitude.total_cmp(&b.latitude),
            Self::Longitude => a.longitude.total_cmp(&b.longitude),
        };
        primary.then_with(|| a.place_id.cmp(&b.place_id))
    }
}

/// Repository trait for loading and storing places.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// All places in the given order.
    async fn list(&self, order: SortOrder<PlaceSortKey>) -> Result<Vec<Place>, DomainError>;

    /// The place with `place_id`, if any.
    async fn find(&self, place_id: Uuid) -> Result<Option<Place>, DomainError>;

    /// The place named exactly `name`, if any.
    async fn find_by_name(&self, name: &str) -> Result<Option<Place>, DomainError>;

    /// Stores a new place.
    async fn insert(&self, place: Place) -> Result<(), DomainError>;

    /// Removes a place, returning whether it existed.
    async fn remove(&self, place_id: Uuid) -> Result<bool, DomainError>;
}
