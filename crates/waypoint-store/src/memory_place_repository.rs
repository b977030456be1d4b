//! In-memory implementation of `PlaceRepository`.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;
use waypoint_core::error::DomainError;
use waypoint_core::repository::{Place, PlaceRepository, PlaceSortKey};
use waypoint_core::sort::SortOrder;

/// A writer panicked while holding the store lock.
#[derive(Debug, Error)]
#[error("place store lock poisoned")]
pub struct StorePoisoned;

/// Place repository held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryPlaceRepository {
    places: RwLock<BTreeMap<Uuid, Place>>,
}

impl MemoryPlaceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `places`.
    pub fn with_places(places: impl IntoIterator<Item = Place>) -> Self {
        Self {
            places: RwLock::new(places.into_iter().map(|p| (p.place_id, p)).collect()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<Uuid, Place>>, DomainError> {
        self.places
            .read()
            .map_err(|_| DomainError::unclassified(StorePoisoned))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<Uuid, Place>>, DomainError> {
        self.places
            .write()
            .map_err(|_| DomainError::unclassified(StorePoisoned))
    }
}

#[async_trait]
impl PlaceRepository for MemoryPlaceRepository {
    async fn list(&self, order: SortOrder<PlaceSortKey>) -> Result<Vec<Place>, DomainError> {
        let mut places: Vec<Place> = self.read()?.values().cloned().collect();
        places.sort_by(|a, b| order.direction().apply(order.field().compare(a, b)));
        Ok(places)
    }

    async fn find(&self, place_id: Uuid) -> Result<Option<Place>, DomainError> {
        Ok(self.read()?.get(&place_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Place>, DomainError> {
        Ok(self.read()?.values().find(|p| p.name == name).cloned())
    }

    async fn insert(&self, place: Place) -> Result<(), DomainError> {
        let mut places = self.write()?;
        if places.values().any(|p| p.name == place.name) {
            return Err(DomainError::conflict(format!(
                "Place with name '{}' already exists",
                place.name
            )));
        }
        if places.contains_key(&place.place_id) {
            return Err(DomainError::conflict(format!(
                "Place with id '{}' already exists",
                place.place_id
            )));
        }
        debug!(place_id = %place.place_id, "inserting place");
        places.insert(place.place_id, place);
        Ok(())
    }

    async fn remove(&self, place_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.write()?.remove(&place_id).is_some())
    }
}
