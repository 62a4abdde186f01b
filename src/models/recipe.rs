use serde::Serialize;

/// Normalized recipe shape used by the client screens
///
/// Built from a raw catalog record by [`crate::source::normalize_meal`];
/// never persisted beyond the display fields copied into a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    /// Short teaser derived from the instruction text
    pub description: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    /// Not provided by the catalog; filled with a fixed placeholder
    #[serde(rename = "cookTime")]
    pub cook_time: String,
    /// Not provided by the catalog; filled with a fixed placeholder
    pub servings: u32,
    /// "measure ingredient" entries, blank slots skipped
    pub ingredients: Vec<String>,
    /// Non-empty instruction steps, split from the source's single text block
    pub instructions: Vec<String>,
    #[serde(rename = "youtubeUrl")]
    pub youtube_url: Option<String>,
}

/// Normalized recipe category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Positional 1-based id (the catalog does not number its categories)
    pub id: usize,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
}
