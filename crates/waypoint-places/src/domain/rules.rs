//! Business rules for places.

use waypoint_core::error::DomainError;
use waypoint_core::repository::Place;
use waypoint_core::validation::Violations;

use crate::domain::commands::CreatePlace;

/// Longest accepted place name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Checks every field of `command`, reporting all violations together.
///
/// # Errors
///
/// Returns `DomainError::FieldViolations` listing each violated rule in
/// field order.
pub fn validate_new_place(command: &CreatePlace) -> Result<(), DomainError> {
    let mut violations = Violations::new();

    let name = command.name.trim();
    violations.require(!name.is_empty(), "name must not be blank");
    violations.require(
        name.chars().count() <= MAX_NAME_LENGTH,
        format!("name must be at most {MAX_NAME_LENGTH} characters"),
    );
    violations.require(
        !command.category.trim().is_empty(),
        "category must not be blank",
    );
    violations.require(
        (-90.0..=90.0).contains(&command.latitude),
        "latitude must be between -90 and 90",
    );
    violations.require(
        (-180.0..=180.0).contains(&command.longitude),
        "longitude must be between -180 and 180",
    );

    violations.into_result()
}

/// Landmarks may not be removed.
///
/// # Errors
///
/// Returns `DomainError::Business` if `place` is a landmark.
pub fn ensure_removable(place: &Place) -> Result<(), DomainError> {
    if place.landmark {
        return Err(DomainError::business(format!(
            "Landmark place '{}' cannot be removed",
            place.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use waypoint_core::category::ErrorCategory;

    use super::*;

    fn command(name: &str, latitude: f64, longitude: f64) -> CreatePlace {
        CreatePlace {
            correlation_id: Uuid::new_v4(),
            name: name.to_owned(),
            category: "cafe".to_owned(),
            latitude,
            longitude,
            landmark: false,
        }
    }

    #[test]
    fn test_valid_place_passes() {
        assert!(validate_new_place(&command("Corner Cafe", 51.5, -0.12)).is_ok());
    }

    #[test]
    fn test_every_violation_is_reported_in_field_order() {
        let err = validate_new_place(&command("  ", 91.0, f64::NAN)).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.message(), "Multiple validation errors");
        assert_eq!(
            err.messages().as_slice(),
            [
                "name must not be blank",
                "latitude must be between -90 and 90",
                "longitude must be between -180 and 180",
            ]
        );
    }

    #[test]
    fn test_single_violation_uses_its_own_message() {
        let long_name = "x".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_new_place(&command(&long_name, 0.0, 0.0)).unwrap_err();

        assert_eq!(err.message(), "name must be at most 100 characters");
    }

    #[test]
    fn test_landmark_is_not_removable() {
        let place = Place {
            place_id: Uuid::new_v4(),
            name: "Old Bridge".to_owned(),
            category: "bridge".to_owned(),
            latitude: 0.0,
            longitude: 0.0,
            landmark: true,
        };

        let err = ensure_removable(&place).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::BusinessRule);
        assert_eq!(err.message(), "Landmark place 'Old Bridge' cannot be removed");
    }
}
