//! Distinct values of the categorical recipe fields, used to populate filter choices.

use crate::data::{Recipe, RecipeStore};
use crate::error::FilterError;
use ahash::AHashMap;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// The wildcard choice meaning "do not filter on this field".
pub const ANY: &str = "Any";

/// The recipe fields that can be filtered by exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    Cuisine,
    MealType,
    Difficulty,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 3] = [
        CategoricalField::Cuisine,
        CategoricalField::MealType,
        CategoricalField::Difficulty,
    ];

    /// Reads this field from a recipe.
    pub fn value_of(self, recipe: &Recipe) -> &str {
        match self {
            CategoricalField::Cuisine => &recipe.cuisine,
            CategoricalField::MealType => &recipe.meal_type,
            CategoricalField::Difficulty => &recipe.difficulty,
        }
    }

    /// The field's key in the catalog JSON.
    pub fn key(self) -> &'static str {
        match self {
            CategoricalField::Cuisine => "cuisine",
            CategoricalField::MealType => "meal_type",
            CategoricalField::Difficulty => "difficulty",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoricalField::Cuisine => "Cuisine",
            CategoricalField::MealType => "Meal Type",
            CategoricalField::Difficulty => "Difficulty",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CategoricalField {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cuisine" => Ok(CategoricalField::Cuisine),
            "meal_type" | "meal-type" => Ok(CategoricalField::MealType),
            "difficulty" => Ok(CategoricalField::Difficulty),
            other => Err(FilterError::UnknownField(other.to_string())),
        }
    }
}

/// Returns the sorted, deduplicated values of `field`, with [`ANY`] first.
///
/// An empty collection yields just `["Any"]`.
pub fn distinct_values(recipes: &[Recipe], field: CategoricalField) -> Vec<String> {
    std::iter::once(ANY.to_string())
        .chain(
            recipes
                .iter()
                .map(|recipe| field.value_of(recipe))
                .unique()
                .sorted()
                .map(str::to_string),
        )
        .collect()
}

/// The choice lists for every categorical field of a store, built once.
#[derive(Debug, Clone)]
pub struct AttributeIndex {
    values: AHashMap<CategoricalField, Vec<String>>,
}

impl AttributeIndex {
    pub fn build(store: &RecipeStore) -> Self {
        let values = CategoricalField::ALL
            .into_iter()
            .map(|field| (field, distinct_values(store.recipes(), field)))
            .collect();
        Self { values }
    }

    /// The choices for `field`, always starting with [`ANY`].
    pub fn values(&self, field: CategoricalField) -> &[String] {
        self.values.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `value` is one of the known choices for `field` (including [`ANY`]).
    pub fn contains(&self, field: CategoricalField, value: &str) -> bool {
        self.values(field).iter().any(|v| v == value)
    }
}
