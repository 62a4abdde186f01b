//! Recipe source adapter
//!
//! Wraps the external recipe catalog (TheMealDB) behind the [`RecipeSource`]
//! trait and normalizes its duck-typed records into the crate's
//! [`Recipe`](crate::models::Recipe) shape. The adapter performs no retries
//! and no caching; every call is a fresh request and any network or parse
//! failure propagates to the caller.

pub mod mealdb;
pub mod raw;

pub use mealdb::MealDbClient;
pub use raw::{normalize_categories, normalize_category, normalize_meal, RawCategory, RawMeal};

use async_trait::async_trait;

use crate::error::Result;

/// Read-only view of the external recipe catalog
///
/// Implemented by [`MealDbClient`] for production and by scripted fakes in
/// the search tests.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Full-text search on the recipe name
    async fn search_by_name(&self, name: &str) -> Result<Vec<RawMeal>>;

    /// Recipes containing the given ingredient (partial records: id, name, thumb)
    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<RawMeal>>;

    /// Recipes in the given category (partial records)
    async fn filter_by_category(&self, category: &str) -> Result<Vec<RawMeal>>;

    /// Full record for a single recipe id, if it exists
    async fn lookup(&self, id: i64) -> Result<Option<RawMeal>>;

    /// One random recipe; the catalog picks
    async fn random(&self) -> Result<Option<RawMeal>>;

    /// All recipe categories
    async fn categories(&self) -> Result<Vec<RawCategory>>;
}
