use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
///
/// Store and source failures are logged with their details and surfaced to
/// clients as opaque errors; validation and not-found errors carry their
/// message through to the response body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Recipe source error: {0}")]
    Source(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Favorite already exists")]
    DuplicateFavorite,
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Store(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Migrate(ref e) => {
                tracing::error!("Migration error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Source(ref e) => {
                tracing::error!("Recipe source error: {:?}", e);
                (StatusCode::BAD_GATEWAY, "Recipe source unavailable".to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::DuplicateFavorite => (
                StatusCode::CONFLICT,
                crate::constants::ERR_DUPLICATE_FAVORITE.to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
