//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the kondate crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kondate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let store = RecipeStore::load("path/to/recipes.json")?;
//! let criteria = FilterCriteria::builder().ingredients("chicken, garlic").build();
//! let plan = FilterPlan::compile(&criteria);
//!
//! for recipe in plan.apply(store.recipes()) {
//!     if let Some(reason) = plan.explain(recipe) {
//!         println!("{}: {}", recipe.name, reason);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Catalog
pub use crate::data::{Recipe, RecipeStore, TimeBounds};

// Choices
pub use crate::attributes::{ANY, AttributeIndex, CategoricalField, distinct_values};

// Filtering
pub use crate::filter::{
    Choice, FilterCriteria, FilterPlan, IngredientQuery, MatchReason, ResultSet, TimeRange,
    filter,
};

// Browsing
pub use crate::pick::pick_random;
pub use crate::session::{BrowseSession, DEFAULT_PAGE_SIZE};

// Configuration
pub use crate::config::AppConfig;

// Error types
pub use crate::error::{ConfigError, FilterError, LoadError, PickError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
