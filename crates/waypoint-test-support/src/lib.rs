//! Shared test doubles and fixtures for Waypoint.

mod fixtures;
mod repository;

pub use fixtures::sample_place;
pub use repository::{
    EmptyPlaceRepository, FAULT_DETAIL, FailingPlaceRepository, PanickingPlaceRepository,
};
