pub mod favorites;
pub mod health;

pub use favorites::{create_favorite, delete_favorite, list_favorites, update_rating};
pub use health::health_check;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::AppState;

/// Build the API router; shared by the binary and the integration tests
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/favorites", post(create_favorite))
        .route("/api/favorites/:user_id", get(list_favorites))
        .route(
            "/api/favorites/:user_id/:recipe_id/rating",
            put(update_rating),
        )
        .route("/api/favorites/:user_id/:recipe_id", delete(delete_favorite))
        .with_state(state)
}
