//! Test fixtures.

use uuid::Uuid;
use waypoint_core::repository::Place;

/// An ordinary, removable place with a fresh id.
#[must_use]
pub fn sample_place(name: &str) -> Place {
    Place {
        place_id: Uuid::new_v4(),
        name: name.to_owned(),
        category: "park".to_owned(),
        latitude: 51.5,
        longitude: -0.12,
        landmark: false,
    }
}
