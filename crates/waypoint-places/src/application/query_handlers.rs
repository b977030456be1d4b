//! Query handlers for the Places context.
//!
//! This module contains query handlers that load places and return
//! read-only view DTOs.

use serde::Serialize;
use uuid::Uuid;
use waypoint_core::error::DomainError;
use waypoint_core::repository::{PLACE_RESOURCE, Place, PlaceRepository, PlaceSortKey};
use waypoint_core::sort::{SortDirection, SortOrder};

/// Read-only view of a place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceView {
    /// The place identifier.
    pub place_id: Uuid,
    /// Display name.
    pub name: String,
    /// Category.
    pub category: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Whether the place is a protected landmark.
    pub landmark: bool,
}

impl From<Place> for PlaceView {
    fn from(place: Place) -> Self {
        Self {
            place_id: place.place_id,
            name: place.name,
            category: place.category,
            latitude: place.latitude,
            longitude: place.longitude,
            landmark: place.landmark,
        }
    }
}

/// Order used when the caller does not ask for one.
pub const DEFAULT_ORDER: SortOrder<PlaceSortKey> =
    SortOrder::new(PlaceSortKey::Name, SortDirection::Asc);

/// Lists every place, ordered by `sort` (`"field"` or `"field,direction"`).
///
/// # Errors
///
/// Returns `DomainError::InvalidSortField` if `sort` names a field outside
/// [`PlaceSortKey::FIELDS`], `DomainError::Validation` for an unknown
/// direction, or any error the repository reports.
pub async fn list_places(
    sort: Option<&str>,
    repo: &dyn PlaceRepository,
) -> Result<Vec<PlaceView>, DomainError> {
    let order = match sort {
        Some(raw) => SortOrder::parse(raw, &PlaceSortKey::FIELDS)?,
        None => DEFAULT_ORDER,
    };
    let places = repo.list(order).await?;
    Ok(places.into_iter().map(PlaceView::from).collect())
}

/// Retrieves a place by its ID.
///
/// # Errors
///
/// Returns `DomainError::ResourceNotFound` if no place has this ID, or any
/// error the repository reports.
pub async fn get_place_by_id(
    place_id: Uuid,
    repo: &dyn PlaceRepository,
) -> Result<PlaceView, DomainError> {
    repo.find(place_id)
        .await?
        .map(PlaceView::from)
        .ok_or_else(|| DomainError::resource_not_found(PLACE_RESOURCE, place_id))
}
