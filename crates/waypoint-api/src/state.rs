//! Shared application state.

use std::sync::Arc;

use waypoint_core::repository::PlaceRepository;

use crate::auth::ApiTokens;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Place storage.
    pub place_repository: Arc<dyn PlaceRepository>,
    /// Bearer tokens accepted by the API.
    pub tokens: Arc<ApiTokens>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(place_repository: Arc<dyn PlaceRepository>, tokens: ApiTokens) -> Self {
        Self {
            place_repository,
            tokens: Arc::new(tokens),
        }
    }
}
