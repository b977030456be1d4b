//! Routes for the Places bounded context.

use axum::extract::State;
use axum::{Router, routing::get};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;
use waypoint_core::envelope::ResponseEnvelope;
use waypoint_places::application::query_handlers::PlaceView;
use waypoint_places::application::{command_handlers, query_handlers};
use waypoint_places::domain::commands;

use crate::auth::Authenticated;
use crate::error::{ApiError, Envelope};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Query string for GET /.
#[derive(Debug, Deserialize)]
pub struct ListPlacesQuery {
    /// `field` or `field,asc|desc`.
    pub sort: Option<String>,
}

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct CreatePlaceRequest {
    /// Display name.
    pub name: String,
    /// Free-form category.
    pub category: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Whether the place is a protected landmark.
    #[serde(default)]
    pub landmark: bool,
}

/// GET /
#[instrument(skip(state, query), fields(sort = ?query.sort))]
async fn list_places(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPlacesQuery>,
) -> Result<Envelope<Vec<PlaceView>>, ApiError> {
    let places =
        query_handlers::list_places(query.sort.as_deref(), &*state.place_repository).await?;
    Ok(Envelope(ResponseEnvelope::success(places)))
}

/// GET /{place_id}
#[instrument(skip(state))]
async fn get_place(
    State(state): State<AppState>,
    ApiPath(place_id): ApiPath<Uuid>,
) -> Result<Envelope<PlaceView>, ApiError> {
    let place = query_handlers::get_place_by_id(place_id, &*state.place_repository).await?;
    Ok(Envelope(ResponseEnvelope::success(place)))
}

/// POST /
#[instrument(skip(state, request), fields(name = %request.name))]
async fn create_place(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePlaceRequest>,
) -> Result<Envelope<PlaceView>, ApiError> {
    let command = commands::CreatePlace {
        correlation_id: Uuid::new_v4(),
        name: request.name,
        category: request.category,
        latitude: request.latitude,
        longitude: request.longitude,
        landmark: request.landmark,
    };

    info!(correlation_id = %command.correlation_id, "handling create_place command");

    let place = command_handlers::handle_create_place(&command, &*state.place_repository).await?;

    Ok(Envelope(ResponseEnvelope::success_with_message(
        PlaceView::from(place),
        "Place created",
    )))
}

/// DELETE /{place_id}
#[instrument(skip(state, actor))]
async fn remove_place(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiPath(place_id): ApiPath<Uuid>,
) -> Result<Envelope<()>, ApiError> {
    let command = commands::RemovePlace {
        correlation_id: Uuid::new_v4(),
        place_id,
        actor,
    };

    info!(correlation_id = %command.correlation_id, "handling remove_place command");

    command_handlers::handle_remove_place(&command, &*state.place_repository).await?;

    Ok(Envelope(ResponseEnvelope::completed_with_message(
        "Place removed",
    )))
}

/// Returns the router for the places context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_places).post(create_place))
        .route("/{place_id}", get(get_place).delete(remove_place))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use waypoint_core::repository::PlaceRepository;
    use waypoint_store::MemoryPlaceRepository;
    use waypoint_test_support::{FailingPlaceRepository, sample_place};

    use crate::auth::ApiTokens;

    fn app_state_with(place_repository: Arc<dyn PlaceRepository>) -> AppState {
        let tokens = ApiTokens::parse("admin-token:admin,member-token:member").unwrap();
        AppState::new(place_repository, tokens)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_places_returns_sorted_envelope() {
        // Arrange
        let repo = MemoryPlaceRepository::with_places([sample_place("Zoo"), sample_place("Abbey")]);
        let app = router().with_state(app_state_with(Arc::new(repo)));
        let request = Request::builder()
            .uri("/?sort=name,desc")
            .body(Body::empty())
            .unwrap();

        // Act
        let (status, json) = send(app, request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["status"], 200);
        assert_eq!(json["data"][0]["name"], "Zoo");
        assert_eq!(json["data"][1]["name"], "Abbey");
    }

    #[tokio::test]
    async fn test_list_places_rejects_unknown_sort_field() {
        let app = router().with_state(app_state_with(Arc::new(MemoryPlaceRepository::new())));
        let request = Request::builder()
            .uri("/?sort=secret_column")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errorCategory"], "VALIDATION");
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("secret_column"));
        assert!(message.contains("[name, category, latitude, longitude]"));
    }

    #[tokio::test]
    async fn test_get_place_with_malformed_id_is_validation_error() {
        let app = router().with_state(app_state_with(Arc::new(MemoryPlaceRepository::new())));
        let request = Request::builder()
            .uri("/not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["errorCategory"], "VALIDATION");
    }

    #[tokio::test]
    async fn test_create_place_returns_created_view() {
        let app = router().with_state(app_state_with(Arc::new(MemoryPlaceRepository::new())));
        let body = serde_json::json!({
            "name": "Harbour Light",
            "category": "lighthouse",
            "latitude": 50.1,
            "longitude": -5.5
        });
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Place created");
        assert_eq!(json["data"]["name"], "Harbour Light");
        assert_eq!(json["data"]["landmark"], false);
    }

    #[tokio::test]
    async fn test_remove_place_without_token_is_unauthenticated() {
        let place = sample_place("Abbey");
        let repo = MemoryPlaceRepository::with_places([place.clone()]);
        let app = router().with_state(app_state_with(Arc::new(repo)));
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", place.place_id))
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["errorCategory"], "AUTHENTICATION");
        assert_eq!(json["message"], "Authentication is required");
    }

    #[tokio::test]
    async fn test_remove_place_as_member_is_forbidden() {
        let place = sample_place("Abbey");
        let repo = MemoryPlaceRepository::with_places([place.clone()]);
        let app = router().with_state(app_state_with(Arc::new(repo)));
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", place.place_id))
            .header("authorization", "Bearer member-token")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["errorCategory"], "PERMISSION");
    }

    #[tokio::test]
    async fn test_get_place_repository_fault_is_system_error() {
        let app = router().with_state(app_state_with(Arc::new(FailingPlaceRepository)));
        let request = Request::builder()
            .uri(format!("/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["errorCategory"], "SYSTEM");
        assert_eq!(json["message"], "An unexpected error occurred");
    }
}
