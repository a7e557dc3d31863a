//! Common test utilities for building recipes and catalogs.
use kondate::prelude::*;

/// Builds a recipe with the fields that matter for filtering.
#[allow(dead_code)]
pub fn recipe(
    name: &str,
    cuisine: &str,
    meal_type: &str,
    difficulty: &str,
    prep: u32,
    cook: u32,
    ingredients: &[&str],
) -> Recipe {
    Recipe::new(
        name,
        cuisine,
        meal_type,
        difficulty,
        prep,
        cook,
        ingredients.iter().map(|s| s.to_string()).collect(),
        None,
        format!("Make the {}.", name),
    )
}

/// The three-recipe catalog used by the word-boundary scenario.
///
/// - A: Italian, prep 10, cook 20, [egg, flour]
/// - B: Mexican, prep 15, cook 25, [chicken, garlic]
/// - C: Italian, prep 30, cook 5, [eggplant, oil]
#[allow(dead_code)]
pub fn create_scenario_recipes() -> Vec<Recipe> {
    vec![
        recipe("A", "Italian", "Dinner", "Easy", 10, 20, &["egg", "flour"]),
        recipe("B", "Mexican", "Lunch", "Medium", 15, 25, &["chicken", "garlic"]),
        recipe("C", "Italian", "Dinner", "Hard", 30, 5, &["eggplant", "oil"]),
    ]
}

/// A broader catalog mixing casing, multi-word ingredients and look-alikes.
#[allow(dead_code)]
pub fn create_mixed_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "Carbonara",
            "Italian",
            "Dinner",
            "Medium",
            10,
            20,
            &["Spaghetti", "Egg Yolk", "Pancetta", "Black Pepper"],
        ),
        recipe(
            "Garlic Chicken",
            "American",
            "Dinner",
            "Easy",
            15,
            30,
            &["Chicken breast", "Garlic", "Butter"],
        ),
        recipe(
            "Chicken Soup",
            "American",
            "Lunch",
            "Easy",
            20,
            60,
            &["  Chicken  ", "Carrot", "Celery"],
        ),
        recipe(
            "Stuffed Peppers",
            "Mexican",
            "Dinner",
            "Medium",
            25,
            40,
            &["Bell pepper", "Rice", "Garlic powder", "Ground beef"],
        ),
        recipe(
            "Omelette",
            "French",
            "Breakfast",
            "Easy",
            5,
            5,
            &["EGG", "Butter", "Chives"],
        ),
        recipe(
            "Baba Ganoush",
            "Lebanese",
            "Snack",
            "Easy",
            10,
            45,
            &["Eggplant", "Tahini", "Garlic", "Lemon juice"],
        ),
    ]
}

/// A catalog in the on-disk JSON format.
#[allow(dead_code)]
pub const SAMPLE_CATALOG_JSON: &str = r#"
[
  {
    "name": "Pancakes",
    "cuisine": "American",
    "meal_type": "Breakfast",
    "difficulty": "Easy",
    "prep_time_minutes": 10,
    "cook_time_minutes": 15,
    "ingredients": ["  Flour ", "Milk", "EGG", "Butter"],
    "image_url": "https://example.com/pancakes.jpg",
    "instructions": "Whisk, rest, and fry."
  },
  {
    "name": "Miso Soup",
    "cuisine": "Japanese",
    "meal_type": "Lunch",
    "difficulty": "Easy",
    "prep_time_minutes": 5,
    "cook_time_minutes": 10,
    "ingredients": ["Dashi", "Miso paste", "Tofu"],
    "image_url": "",
    "instructions": "Dissolve miso in hot dashi and add tofu."
  },
  {
    "name": "Ratatouille",
    "cuisine": "French",
    "meal_type": "Dinner",
    "difficulty": "Medium",
    "prep_time_minutes": 25,
    "cook_time_minutes": 50,
    "ingredients": ["Eggplant", "Zucchini", "Tomato", "Olive oil"],
    "instructions": "Slice, layer, and bake slowly."
  }
]
"#;

/// Names of the recipes in a result set, in order.
#[allow(dead_code)]
pub fn names(results: &[&Recipe]) -> Vec<String> {
    results.iter().map(|r| r.name.clone()).collect()
}
