//! Tasty recipe search.

use crate::{RapidApiClient, data_array};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use switchyard_core::Params;
use switchyard_error::SwitchyardResult;

const RECIPES_URL: &str = "https://tasty.p.rapidapi.com/recipes/list";

/// Upper bound the recipe endpoint accepts for `size`.
pub const MAX_RECIPES: u32 = 40;

fn default_size() -> u32 {
    10
}

/// Arguments of [`RapidApiClient::search_recipes`].
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct RecipeSearchRequest {
    /// Ingredient or dish.
    query: String,
    /// Offset of the first result.
    #[serde(default)]
    #[builder(default)]
    offset: u32,
    /// Number of results, capped at [`MAX_RECIPES`].
    #[serde(default = "default_size")]
    #[builder(default = "default_size()")]
    size: u32,
}

/// Non-empty strings under `field` of each object in `items`.
fn texts(items: &[Value], field: &str) -> Vec<Value> {
    items
        .iter()
        .filter_map(|item| item.get(field))
        .filter(|text| text.as_str().is_some_and(|s| !s.is_empty()))
        .cloned()
        .collect()
}

/// Reduces a Tasty recipe to the fields worth showing.
fn project_recipe(recipe: &Value) -> Value {
    let field = |name: &str| recipe.get(name).cloned().unwrap_or(Value::Null);

    let ingredients: Vec<Value> = data_array(recipe, "sections")
        .iter()
        .flat_map(|section| texts(&data_array(section, "components"), "raw_text"))
        .collect();

    json!({
        "id": field("id"),
        "name": field("name"),
        "description": field("description"),
        "thumbnail_url": field("thumbnail_url"),
        "video_url": field("video_url"),
        "cook_time_minutes": field("cook_time_minutes"),
        "prep_time_minutes": field("prep_time_minutes"),
        "total_time_minutes": field("total_time_minutes"),
        "servings": field("num_servings"),
        "difficulty": field("difficulty"),
        "tags": texts(&data_array(recipe, "tags"), "name"),
        "nutrition": field("nutrition"),
        "instructions": texts(&data_array(recipe, "instructions"), "display_text"),
        "ingredients": ingredients,
    })
}

impl RapidApiClient {
    /// Searches recipes.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error on transport failure or a non-success status.
    pub async fn search_recipes(&self, request: &RecipeSearchRequest) -> SwitchyardResult<Value> {
        let size = request.size.min(MAX_RECIPES);
        let params = Params::new()
            .with("q", request.query.as_str())
            .with("from", request.offset)
            .with("size", size);

        let data = self.get(RECIPES_URL, params).await?;
        let recipes: Vec<Value> = data_array(&data, "results")
            .iter()
            .map(project_recipe)
            .collect();
        let total = data
            .get("count")
            .cloned()
            .unwrap_or_else(|| json!(recipes.len()));

        Ok(json!({
            "query": request.query,
            "offset": request.offset,
            "size": size,
            "count": recipes.len(),
            "total_count": total,
            "recipes": recipes,
        }))
    }
}
