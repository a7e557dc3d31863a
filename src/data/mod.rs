mod model;
mod store;

pub use model::Recipe;
pub use store::{RecipeStore, TimeBounds};
