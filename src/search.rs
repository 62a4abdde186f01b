//! Client-side search and merge logic
//!
//! The catalog has no multi-ingredient query, so the all-ingredients search
//! fetches one result set per term and intersects them in memory. All
//! multi-request operations here run their sub-requests concurrently and
//! fail as a whole if any one fails.

use futures::future::try_join_all;
use std::collections::HashSet;

use crate::constants::{RANDOM_BATCH_SIZE, SEARCH_RESULT_LIMIT};
use crate::error::Result;
use crate::models::{Category, Recipe};
use crate::source::{normalize_categories, normalize_meal, RawMeal, RecipeSource};

/// Everything the home screen needs, fetched in one concurrent round
#[derive(Debug, Clone)]
pub struct HomeFeed {
    pub categories: Vec<Category>,
    pub recipes: Vec<Recipe>,
    pub featured: Option<Recipe>,
}

/// Single-query search
///
/// A blank query yields a batch of random recipes. Otherwise the recipe name
/// is searched first, falling back to an ingredient match when the name
/// search comes up empty. Results are truncated to [`SEARCH_RESULT_LIMIT`]
/// before normalization.
pub async fn search<S: RecipeSource + ?Sized>(source: &S, query: &str) -> Result<Vec<Recipe>> {
    let query = query.trim();
    if query.is_empty() {
        return random_batch(source, RANDOM_BATCH_SIZE).await;
    }

    let mut results = source.search_by_name(query).await?;
    if results.is_empty() {
        results = source.filter_by_ingredient(query).await?;
    }

    results.truncate(SEARCH_RESULT_LIMIT);
    Ok(normalize_all(&results))
}

/// All-ingredients search: a recipe qualifies only if it appears in the
/// result set of every whitespace-separated term
///
/// Zero terms yields an empty result without touching the catalog. Per-term
/// fetches run concurrently; if any term matches nothing, the intersection
/// is empty. One representative record per id is kept, first occurrence in
/// flattened term order.
pub async fn search_all_ingredients<S: RecipeSource + ?Sized>(
    source: &S,
    query: &str,
) -> Result<Vec<Recipe>> {
    let terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let per_term = try_join_all(terms.iter().map(|term| source.filter_by_ingredient(term))).await?;

    let id_sets: Vec<HashSet<&str>> = per_term
        .iter()
        .map(|meals| meals.iter().map(|m| m.id.as_str()).collect())
        .collect();

    let mut seen = HashSet::new();
    let mut intersected: Vec<&RawMeal> = Vec::new();
    for meal in per_term.iter().flatten() {
        if seen.insert(meal.id.as_str()) && id_sets.iter().all(|set| set.contains(meal.id.as_str()))
        {
            intersected.push(meal);
        }
    }

    intersected.truncate(SEARCH_RESULT_LIMIT);
    Ok(intersected.into_iter().filter_map(normalize_meal).collect())
}

/// Fetch `count` random recipes concurrently, deduplicated by id
///
/// The catalog hands out one random meal per request, so a batch is `count`
/// parallel requests; duplicates across draws are collapsed.
pub async fn random_batch<S: RecipeSource + ?Sized>(
    source: &S,
    count: usize,
) -> Result<Vec<Recipe>> {
    let draws = try_join_all((0..count).map(|_| source.random())).await?;

    let mut seen = HashSet::new();
    let mut recipes = Vec::new();
    for meal in draws.into_iter().flatten() {
        if seen.insert(meal.id.clone()) {
            if let Some(recipe) = normalize_meal(&meal) {
                recipes.push(recipe);
            }
        }
    }
    Ok(recipes)
}

/// Fetch categories, a random batch and a featured recipe in one concurrent
/// round (fail-fast, no partial results)
pub async fn home_feed<S: RecipeSource + ?Sized>(source: &S) -> Result<HomeFeed> {
    let (raw_categories, recipes, featured) = futures::try_join!(
        source.categories(),
        random_batch(source, RANDOM_BATCH_SIZE),
        source.random(),
    )?;

    Ok(HomeFeed {
        categories: normalize_categories(&raw_categories),
        recipes,
        featured: featured.as_ref().and_then(normalize_meal),
    })
}

/// Normalized recipes for one category
pub async fn recipes_for_category<S: RecipeSource + ?Sized>(
    source: &S,
    category: &str,
) -> Result<Vec<Recipe>> {
    let meals = source.filter_by_category(category).await?;
    Ok(normalize_all(&meals))
}

fn normalize_all(meals: &[RawMeal]) -> Vec<Recipe> {
    meals.iter().filter_map(normalize_meal).collect()
}
