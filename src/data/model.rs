use serde::{Deserialize, Serialize};

/// A single recipe record, exactly as it appears in the catalog JSON.
///
/// This is only used as the deserialization target; every `Recipe` is built
/// from one so that the normalized ingredient list is always derived.
#[derive(Deserialize, Debug)]
struct RawRecipe {
    name: String,
    cuisine: String,
    meal_type: String,
    difficulty: String,
    prep_time_minutes: u32,
    cook_time_minutes: u32,
    ingredients: Vec<String>,
    #[serde(default)]
    image_url: Option<String>,
    instructions: String,
}

/// An immutable recipe held by a [`RecipeStore`](crate::data::RecipeStore).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawRecipe")]
pub struct Recipe {
    pub name: String,
    pub cuisine: String,
    pub meal_type: String,
    pub difficulty: String,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    /// Ingredients with their original casing, for display.
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub instructions: String,
    #[serde(skip_serializing)]
    ingredients_normalized: Vec<String>,
}

impl Recipe {
    /// Creates a recipe, deriving the normalized ingredient list.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        meal_type: impl Into<String>,
        difficulty: impl Into<String>,
        prep_time_minutes: u32,
        cook_time_minutes: u32,
        ingredients: Vec<String>,
        image_url: Option<String>,
        instructions: impl Into<String>,
    ) -> Self {
        let ingredients_normalized = normalize_ingredients(&ingredients);
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            meal_type: meal_type.into(),
            difficulty: difficulty.into(),
            prep_time_minutes,
            cook_time_minutes,
            ingredients,
            image_url: image_url.filter(|url| !url.trim().is_empty()),
            instructions: instructions.into(),
            ingredients_normalized,
        }
    }

    /// Ingredients lower-cased and trimmed, in the same order as `ingredients`.
    pub fn ingredients_normalized(&self) -> &[String] {
        &self.ingredients_normalized
    }

    /// Total minutes from start to table.
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Recipe::new(
            raw.name,
            raw.cuisine,
            raw.meal_type,
            raw.difficulty,
            raw.prep_time_minutes,
            raw.cook_time_minutes,
            raw.ingredients,
            raw.image_url,
            raw.instructions,
        )
    }
}

fn normalize_ingredients(ingredients: &[String]) -> Vec<String> {
    ingredients
        .iter()
        .map(|item| item.trim().to_lowercase())
        .collect()
}
