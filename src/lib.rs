//! # Kondate - Recipe Catalog Filtering
//!
//! **Kondate** filters a static recipe catalog by categorical attributes
//! (cuisine, meal type, difficulty), inclusive prep and cook time ranges and a
//! free-text ingredient search, and hands the surviving recipes back for
//! browsing. Filtering is boolean: recipes either match every active criterion
//! or they are dropped, and survivors keep the order of the catalog.
//!
//! ## Core Workflow
//!
//! 1.  **Load the catalog**: `RecipeStore::load` reads a JSON array of recipes once.
//!     `RecipeStore::load_or_empty` keeps going with an empty catalog if the file
//!     is missing or malformed, returning the error for display.
//! 2.  **Offer choices**: `AttributeIndex::build` (or `distinct_values`) lists the
//!     values of each categorical field, with the `"Any"` wildcard first.
//! 3.  **Filter**: build a `FilterCriteria` and call `filter`, or compile it once
//!     with `FilterPlan::compile` and `apply` it as often as needed.
//! 4.  **Browse**: wrap the result in a `BrowseSession` to page through it, or
//!     use `RecipeStore::pick_random` for a single surprise recipe.
//!
//! ## Ingredient Search
//!
//! The ingredient query is a comma-separated list of terms. A recipe matches when
//! **every** term appears as a whole word in **at least one** of its ingredients,
//! ignoring case: `"egg"` matches `"egg"` and `"egg yolk"` but not `"eggplant"`.
//! Terms are matched literally, so punctuation carries no special meaning.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kondate::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let (store, load_error) = RecipeStore::load_or_empty("recipes.json");
//!     if let Some(e) = load_error {
//!         eprintln!("Warning: {}", e);
//!     }
//!
//!     let index = AttributeIndex::build(&store);
//!     println!("Cuisines: {:?}", index.values(CategoricalField::Cuisine));
//!
//!     let criteria = FilterCriteria::builder()
//!         .cuisine("Italian")
//!         .prep_time(0, 60)
//!         .cook_time(0, 60)
//!         .ingredients("egg, flour")
//!         .build();
//!
//!     let results = filter(store.recipes(), &criteria);
//!     let session = BrowseSession::from_results(results, 5);
//!     for recipe in session.visible() {
//!         println!("{} ({} min)", recipe.name, recipe.total_time_minutes());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod attributes;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod pick;
pub mod prelude;
pub mod session;

pub use attributes::{ANY, AttributeIndex, CategoricalField, distinct_values};
pub use data::{Recipe, RecipeStore, TimeBounds};
pub use filter::{FilterCriteria, FilterPlan, ResultSet, filter};
pub use pick::pick_random;
