/// Default base URL for TheMealDB JSON API (free tier)
pub const MEALDB_DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Maximum number of results returned by a search before normalization
pub const SEARCH_RESULT_LIMIT: usize = 16;

/// Number of random meals fetched for the empty-query / home-feed case
pub const RANDOM_BATCH_SIZE: usize = 12;

/// TheMealDB exposes at most 20 numbered ingredient/measure slots per meal
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// The source provides no cook time; the UI shows this fixed value
pub const COOK_TIME_PLACEHOLDER: &str = "30 minutes";

/// The source provides no servings count; the UI shows this fixed value
pub const SERVINGS_PLACEHOLDER: u32 = 4;

/// Rating categories are a fixed 1..=4 enumeration (nope / ok / good / undecided)
pub const MIN_RATING_ID: i64 = 1;
pub const MAX_RATING_ID: i64 = 4;

/// Keep-alive ping interval (hosting platforms idle out after ~15 minutes)
pub const KEEP_ALIVE_INTERVAL_SECS: u64 = 14 * 60;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message when a create request omits userId, recipeId or title
pub const ERR_MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// Error message for a ratingId outside the fixed categories
pub const ERR_INVALID_RATING: &str = "ratingId must be one of the four rating categories";

/// Error message when the (userId, recipeId) pair has no favorite row
pub const ERR_FAVORITE_NOT_FOUND: &str = "Favorite not found";

/// Error message when a recipe is bookmarked twice by the same user
pub const ERR_DUPLICATE_FAVORITE: &str = "Recipe is already bookmarked";
