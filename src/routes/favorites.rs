use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_FAVORITE_NOT_FOUND, ERR_INVALID_RATING, ERR_MISSING_REQUIRED_FIELDS};
use crate::error::{AppError, Result};
use crate::models::Favorite;
use crate::AppState;

const FAVORITE_COLUMNS: &str =
    "id, user_id, recipe_id, rating_id, title, image, cook_time, servings, created_at";

#[derive(Debug, Deserialize)]
pub struct CreateFavoriteRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "recipeId")]
    pub recipe_id: Option<i64>,
    #[serde(rename = "ratingId")]
    pub rating_id: Option<i64>,
    pub title: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "cookTime")]
    pub cook_time: Option<String>,
    pub servings: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRatingRequest {
    /// One of the four rating categories; null (or absent) clears the rating
    #[serde(rename = "ratingId")]
    pub rating_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeleteFavoriteResponse {
    pub success: bool,
    pub message: String,
    /// Number of rows actually removed; 0 means there was nothing to delete
    pub deleted: u64,
}

/// Bookmark a recipe for a user
///
/// The display fields (title, image, cookTime, servings) are copied from the
/// catalog at bookmark time and stored denormalized.
///
/// Returns 400 when userId, recipeId or title is missing or blank, and 409
/// when the (userId, recipeId) pair is already bookmarked.
pub async fn create_favorite(
    State(state): State<AppState>,
    Json(payload): Json<CreateFavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>)> {
    let user_id = non_blank(payload.user_id.as_deref());
    let title = non_blank(payload.title.as_deref());

    let (Some(user_id), Some(recipe_id), Some(title)) = (user_id, payload.recipe_id, title) else {
        tracing::warn!("Create favorite rejected: missing required fields");
        return Err(AppError::Validation(ERR_MISSING_REQUIRED_FIELDS.to_string()));
    };

    if let Some(rating_id) = payload.rating_id {
        if !Favorite::validate_rating_id(rating_id) {
            return Err(AppError::Validation(ERR_INVALID_RATING.to_string()));
        }
    }

    let favorite = sqlx::query_as::<_, Favorite>(&format!(
        "INSERT INTO favorites (user_id, recipe_id, rating_id, title, image, cook_time, servings, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {FAVORITE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(recipe_id)
    .bind(payload.rating_id)
    .bind(title)
    .bind(&payload.image)
    .bind(&payload.cook_time)
    .bind(&payload.servings)
    .bind(Utc::now())
    .fetch_one(&state.pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateFavorite,
        _ => AppError::Store(e),
    })?;

    tracing::info!(
        "Favorite created: user={} recipe={}",
        favorite.user_id,
        favorite.recipe_id
    );

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// List a user's favorites in insertion order
///
/// A user with no bookmarks gets an empty array, not an error.
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Favorite>>> {
    let favorites = sqlx::query_as::<_, Favorite>(&format!(
        "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE user_id = ? ORDER BY id"
    ))
    .bind(&user_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(favorites))
}

/// Set or clear the rating on an existing favorite
///
/// Returns 404 when the (userId, recipeId) pair has no favorite row.
pub async fn update_rating(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i64)>,
    Json(payload): Json<UpdateRatingRequest>,
) -> Result<Json<Favorite>> {
    if let Some(rating_id) = payload.rating_id {
        if !Favorite::validate_rating_id(rating_id) {
            return Err(AppError::Validation(ERR_INVALID_RATING.to_string()));
        }
    }

    let updated = sqlx::query_as::<_, Favorite>(&format!(
        "UPDATE favorites SET rating_id = ? WHERE user_id = ? AND recipe_id = ? \
         RETURNING {FAVORITE_COLUMNS}"
    ))
    .bind(payload.rating_id)
    .bind(&user_id)
    .bind(recipe_id)
    .fetch_optional(&state.pool)
    .await?;

    match updated {
        Some(favorite) => Ok(Json(favorite)),
        None => {
            tracing::warn!(
                "Rating update for nonexistent favorite: user={} recipe={}",
                user_id,
                recipe_id
            );
            Err(AppError::NotFound(ERR_FAVORITE_NOT_FOUND.to_string()))
        }
    }
}

/// Remove a bookmark
///
/// Deleting a pair that was never bookmarked still succeeds; the response
/// carries the deleted-row count so callers can tell the two apart.
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i64)>,
) -> Result<Json<DeleteFavoriteResponse>> {
    let result = sqlx::query("DELETE FROM favorites WHERE user_id = ? AND recipe_id = ?")
        .bind(&user_id)
        .bind(recipe_id)
        .execute(&state.pool)
        .await?;

    let deleted = result.rows_affected();
    if deleted == 0 {
        tracing::debug!(
            "Delete was a no-op: user={} recipe={} had no favorite",
            user_id,
            recipe_id
        );
    }

    Ok(Json(DeleteFavoriteResponse {
        success: true,
        message: "Favorite removed successfully".to_string(),
        deleted,
    }))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
