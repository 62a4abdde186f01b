use async_trait::async_trait;

use crate::error::Result;
use crate::source::raw::{CategoriesEnvelope, MealsEnvelope, RawCategory, RawMeal};
use crate::source::RecipeSource;

/// Client for TheMealDB JSON API
///
/// Stateless: no retries, no caching, no auth. The free tier takes the API
/// key as a path segment, already part of the configured base URL.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
    http: reqwest::Client,
}

impl MealDbClient {
    /// Create a new client against the given base URL
    /// (e.g. `https://www.themealdb.com/api/json/v1/1`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn get_meals(&self, endpoint: &str, param: &str, value: &str) -> Result<Vec<RawMeal>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("Fetching {} with {}={}", endpoint, param, value);

        let envelope: MealsEnvelope = self
            .http
            .get(&url)
            .query(&[(param, value)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // The catalog sends {"meals": null} when nothing matches
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_name(&self, name: &str) -> Result<Vec<RawMeal>> {
        self.get_meals("search.php", "s", name).await
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<RawMeal>> {
        self.get_meals("filter.php", "i", ingredient).await
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RawMeal>> {
        self.get_meals("filter.php", "c", category).await
    }

    async fn lookup(&self, id: i64) -> Result<Option<RawMeal>> {
        let meals = self.get_meals("lookup.php", "i", &id.to_string()).await?;
        Ok(meals.into_iter().next())
    }

    async fn random(&self) -> Result<Option<RawMeal>> {
        let url = format!("{}/random.php", self.base_url);
        let envelope: MealsEnvelope = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.meals.unwrap_or_default().into_iter().next())
    }

    async fn categories(&self) -> Result<Vec<RawCategory>> {
        let url = format!("{}/categories.php", self.base_url);
        let envelope: CategoriesEnvelope = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.categories.unwrap_or_default())
    }
}
