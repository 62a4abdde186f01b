use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::constants::{COOK_TIME_PLACEHOLDER, MAX_INGREDIENT_SLOTS, SERVINGS_PLACEHOLDER};
use crate::models::{Category, Recipe};

/// Raw meal record as delivered by the catalog
///
/// The catalog spreads ingredients over 20 numbered `strIngredientN` /
/// `strMeasureN` columns and returns `""` or `null` for unused slots; those
/// land in the flattened `extra` map. Filter endpoints return partial
/// records carrying only id, name and thumbnail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl RawMeal {
    /// Look up a numbered slot field, treating null and blank as absent
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.extra
            .get(&format!("{prefix}{index}"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Raw category record as delivered by the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb")]
    pub thumb: Option<String>,
    #[serde(rename = "strCategoryDescription")]
    pub description: Option<String>,
}

/// Meal-list envelope; the catalog sends `{"meals": null}` for zero matches
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    pub meals: Option<Vec<RawMeal>>,
}

/// Category-list envelope
#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    pub categories: Option<Vec<RawCategory>>,
}

/// Normalize a raw meal record into the app's [`Recipe`] shape
///
/// Returns `None` for malformed records (unparsable id, missing title);
/// callers drop those rather than erroring. Missing optional fields are
/// placeholder-filled: the catalog has no cook time or servings at all.
pub fn normalize_meal(raw: &RawMeal) -> Option<Recipe> {
    let id: i64 = raw.id.trim().parse().ok()?;
    let title = raw.name.as_deref().map(str::trim).filter(|s| !s.is_empty())?;

    let mut ingredients = Vec::new();
    for i in 1..=MAX_INGREDIENT_SLOTS {
        // Blank ingredient slots are skipped outright; a blank measure
        // yields the bare ingredient name, never a blank prefix.
        let Some(ingredient) = raw.slot("strIngredient", i) else {
            continue;
        };
        match raw.slot("strMeasure", i) {
            Some(measure) => ingredients.push(format!("{measure} {ingredient}")),
            None => ingredients.push(ingredient.to_string()),
        }
    }

    let instructions: Vec<String> = raw
        .instructions
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let description = instructions
        .first()
        .map(|step| {
            let teaser: String = step.chars().take(120).collect();
            if step.chars().count() > 120 {
                format!("{teaser}...")
            } else {
                teaser
            }
        })
        .unwrap_or_else(|| "A delicious recipe worth trying.".to_string());

    Some(Recipe {
        id,
        title: title.to_string(),
        description,
        image: raw.thumb.clone().filter(|s| !s.is_empty()),
        category: raw.category.clone().filter(|s| !s.is_empty()),
        area: raw.area.clone().filter(|s| !s.is_empty()),
        cook_time: COOK_TIME_PLACEHOLDER.to_string(),
        servings: SERVINGS_PLACEHOLDER,
        ingredients,
        instructions,
        youtube_url: raw.youtube.clone().filter(|s| !s.is_empty()),
    })
}

/// Normalize the category list, assigning positional 1-based ids
pub fn normalize_categories(raw: &[RawCategory]) -> Vec<Category> {
    raw.iter()
        .enumerate()
        .map(|(index, cat)| normalize_category(cat, index + 1))
        .collect()
}

/// Normalize a single raw category
pub fn normalize_category(raw: &RawCategory, id: usize) -> Category {
    Category {
        id,
        name: raw.name.clone(),
        image: raw.thumb.clone().filter(|s| !s.is_empty()),
        description: raw.description.clone().filter(|s| !s.is_empty()),
    }
}
