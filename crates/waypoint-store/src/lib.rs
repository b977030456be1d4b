//! Waypoint Store — storage adapters for the `PlaceRepository` port.

pub mod memory_place_repository;

pub use memory_place_repository::MemoryPlaceRepository;
