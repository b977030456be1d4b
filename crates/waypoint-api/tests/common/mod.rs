//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use waypoint_core::repository::{Place, PlaceRepository};
use waypoint_store::MemoryPlaceRepository;

use waypoint_api::auth::ApiTokens;
use waypoint_api::state::AppState;

/// Token granting the admin role.
pub const ADMIN_TOKEN: &str = "admin-token";

/// Token granting the member role.
pub const MEMBER_TOKEN: &str = "member-token";

/// Build the full app with `place_repository` and the test tokens. Uses the
/// same router as `main.rs`.
pub fn build_test_app_with(place_repository: Arc<dyn PlaceRepository>) -> Router {
    let tokens = ApiTokens::parse(&format!("{ADMIN_TOKEN}:admin,{MEMBER_TOKEN}:member"))
        .unwrap();
    waypoint_api::app(AppState::new(place_repository, tokens))
}

/// Build the full app over an in-memory store seeded with `places`.
pub fn build_test_app(places: impl IntoIterator<Item = Place>) -> Router {
    build_test_app_with(Arc::new(MemoryPlaceRepository::with_places(places)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a bodiless request with any method.
pub async fn send_empty(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a POST request with a raw body and JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, &body.to_string()).await
}

/// Send a DELETE request, optionally with a bearer token.
pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();

    send(app, request).await
}

/// Assert the common shape of a failure envelope.
pub fn assert_failure(json: &serde_json::Value, status: u16, category: &str, path: &str) {
    assert_eq!(json["success"], false);
    assert_eq!(json["status"], status);
    assert_eq!(json["errorCategory"], category);
    assert_eq!(json["path"], path);
    assert!(json["timestamp"].is_string());
    assert!(json.get("data").is_none());
    assert!(!json["errors"].as_array().unwrap().is_empty());
}
