//! Waypoint — Places bounded context.
//!
//! Responsible for registering, listing, looking up, and removing places.
//! Every failure is reported as a `DomainError` so the API layer can
//! translate it without knowing this context.

pub mod application;
pub mod domain;
