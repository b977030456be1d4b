//! Command handlers for the Places context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: validate, check current state, persist.

use tracing::info;
use uuid::Uuid;
use waypoint_core::error::DomainError;
use waypoint_core::repository::{PLACE_RESOURCE, Place, PlaceRepository};

use crate::domain::commands::{CreatePlace, RemovePlace};
use crate::domain::rules;

/// Handles the `CreatePlace` command: validates the input, rejects duplicate
/// names, and stores the new place.
///
/// # Errors
///
/// Returns `DomainError::FieldViolations` if the input is invalid,
/// `DomainError::Conflict` if a place with the same name exists, or any error
/// the repository reports.
pub async fn handle_create_place(
    command: &CreatePlace,
    repo: &dyn PlaceRepository,
) -> Result<Place, DomainError> {
    rules::validate_new_place(command)?;

    let name = command.name.trim();
    if repo.find_by_name(name).await?.is_some() {
        return Err(DomainError::conflict(format!(
            "Place with name '{name}' already exists"
        )));
    }

    let place = Place {
        place_id: Uuid::now_v7(),
        name: name.to_owned(),
        category: command.category.trim().to_owned(),
        latitude: command.latitude,
        longitude: command.longitude,
        landmark: command.landmark,
    };
    repo.insert(place.clone()).await?;

    info!(
        correlation_id = %command.correlation_id,
        place_id = %place.place_id,
        "place created"
    );
    Ok(place)
}

/// Handles the `RemovePlace` command.
///
/// # Errors
///
/// Returns `DomainError::Unauthorized` if the actor is not an admin,
/// `DomainError::ResourceNotFound` if the place does not exist,
/// `DomainError::Business` if it is a landmark, or any error the repository
/// reports.
pub async fn handle_remove_place(
    command: &RemovePlace,
    repo: &dyn PlaceRepository,
) -> Result<(), DomainError> {
    if !command.actor.is_admin() {
        return Err(DomainError::unauthorized(
            "Only administrators may remove places",
        ));
    }

    let place = repo
        .find(command.place_id)
        .await?
        .ok_or_else(|| DomainError::resource_not_found(PLACE_RESOURCE, command.place_id))?;
    rules::ensure_removable(&place)?;

    if !repo.remove(command.place_id).await? {
        return Err(DomainError::resource_not_found(
            PLACE_RESOURCE,
            command.place_id,
        ));
    }

    info!(
        correlation_id = %command.correlation_id,
        place_id = %command.place_id,
        "place removed"
    );
    Ok(())
}
