use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_RATING_ID, MIN_RATING_ID};

/// Favorite model representing one (user, recipe) bookmark
///
/// `title`, `image`, `cook_time` and `servings` are display fields copied
/// from the recipe catalog at bookmark time; they are never re-synced.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    /// Surrogate id assigned by the store on insert
    pub id: i64,
    /// Opaque user id issued by the external identity provider
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Recipe id as assigned by the external recipe catalog
    #[serde(rename = "recipeId")]
    pub recipe_id: i64,
    /// One of the four fixed rating categories; absent until the user rates
    #[serde(rename = "ratingId")]
    pub rating_id: Option<i64>,
    pub title: String,
    pub image: Option<String>,
    #[serde(rename = "cookTime")]
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Validate that a rating id falls in the fixed 1..=4 enumeration
    pub fn validate_rating_id(rating_id: i64) -> bool {
        (MIN_RATING_ID..=MAX_RATING_ID).contains(&rating_id)
    }
}
