//! Commands for the Places context.

use uuid::Uuid;
use waypoint_core::auth::Actor;

/// Command to register a new place.
#[derive(Debug, Clone)]
pub struct CreatePlace {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form category.
    pub category: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Whether the place is a protected landmark.
    pub landmark: bool,
}

/// Command to remove a place.
#[derive(Debug, Clone)]
pub struct RemovePlace {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The place to remove.
    pub place_id: Uuid,
    /// Who is asking.
    pub actor: Actor,
}
