//! Test repositories — mock `PlaceRepository` implementations for tests.

use std::io;

use async_trait::async_trait;
use uuid::Uuid;
use waypoint_core::error::DomainError;
use waypoint_core::repository::{Place, PlaceRepository, PlaceSortKey};
use waypoint_core::sort::SortOrder;

/// Internal detail carried by every fault `FailingPlaceRepository` raises.
/// Tests assert it never reaches a response body.
pub const FAULT_DETAIL: &str = "connection refused: db-primary.internal:5432";

fn fault() -> DomainError {
    DomainError::unclassified(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        FAULT_DETAIL,
    ))
}

/// A place repository that holds nothing and silently accepts writes.
/// Useful for testing "not found" scenarios.
#[derive(Debug)]
pub struct EmptyPlaceRepository;

#[async_trait]
impl PlaceRepository for EmptyPlaceRepository {
    async fn list(&self, _order: SortOrder<PlaceSortKey>) -> Result<Vec<Place>, DomainError> {
        Ok(vec![])
    }

    async fn find(&self, _place_id: Uuid) -> Result<Option<Place>, DomainError> {
        Ok(None)
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Place>, DomainError> {
        Ok(None)
    }

    async fn insert(&self, _place: Place) -> Result<(), DomainError> {
        Ok(())
    }

    async fn remove(&self, _place_id: Uuid) -> Result<bool, DomainError> {
        Ok(false)
    }
}

/// A place repository whose every call fails with an unclassified fault.
/// Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingPlaceRepository;

#[async_trait]
impl PlaceRepository for FailingPlaceRepository {
    async fn list(&self, _order: SortOrder<PlaceSortKey>) -> Result<Vec<Place>, DomainError> {
        Err(fault())
    }

    async fn find(&self, _place_id: Uuid) -> Result<Option<Place>, DomainError> {
        Err(fault())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Place>, DomainError> {
        Err(fault())
    }

    async fn insert(&self, _place: Place) -> Result<(), DomainError> {
        Err(fault())
    }

    async fn remove(&self, _place_id: Uuid) -> Result<bool, DomainError> {
        Err(fault())
    }
}

/// A place repository that panics on every call. Useful for testing that
/// panics inside handlers still produce a well-formed response.
#[derive(Debug)]
pub struct PanickingPlaceRepository;

#[async_trait]
impl PlaceRepository for PanickingPlaceRepository {
    async fn list(&self, _order: SortOrder<PlaceSortKey>) -> Result<Vec<Place>, DomainError> {
        panic!("{FAULT_DETAIL}")
    }

    async fn find(&self, _place_id: Uuid) -> Result<Option<Place>, DomainError> {
        panic!("{FAULT_DETAIL}")
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Place>, DomainError> {
        panic!("{FAULT_DETAIL}")
    }

    async fn insert(&self, _place: Place) -> Result<(), DomainError> {
        panic!("{FAULT_DETAIL}")
    }

    async fn remove(&self, _place_id: Uuid) -> Result<bool, DomainError> {
        panic!("{FAULT_DETAIL}")
    }
}
