use super::model::Recipe;
use crate::error::{LoadError, PickError};
use crate::pick;
use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The maximum prep and cook times found in a catalog, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBounds {
    pub max_prep_minutes: u32,
    pub max_cook_minutes: u32,
}

/// A read-only, in-memory recipe catalog.
///
/// A store is loaded once at start-up and then shared by reference with
/// everything that needs to read recipes. It never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Loads a catalog from a JSON file containing an array of recipe objects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Loading recipes from '{}'", path.display());

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(|e| LoadError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        info!("Loaded {} recipe(s) from '{}'", recipes.len(), path.display());
        Ok(Self { recipes })
    }

    /// Loads a catalog, falling back to an empty one if loading fails.
    ///
    /// The error is returned alongside the empty store so the caller can show
    /// it; the process keeps running without data.
    pub fn load_or_empty(path: impl AsRef<Path>) -> (Self, Option<LoadError>) {
        match Self::load(path) {
            Ok(store) => (store, None),
            Err(e) => {
                warn!("{}. Continuing with an empty recipe catalog.", e);
                (Self::default(), Some(e))
            }
        }
    }

    /// Parses a catalog from an in-memory JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let recipes = serde_json::from_str(json)?;
        Ok(Self { recipes })
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Returns the largest prep and cook times in the catalog, or `None` when
    /// the catalog is empty.
    pub fn time_bounds(&self) -> Option<TimeBounds> {
        let max_prep_minutes = self.recipes.iter().map(|r| r.prep_time_minutes).max()?;
        let max_cook_minutes = self.recipes.iter().map(|r| r.cook_time_minutes).max()?;
        Some(TimeBounds {
            max_prep_minutes,
            max_cook_minutes,
        })
    }

    /// Picks one recipe uniformly at random using the thread-local generator.
    pub fn pick_random(&self) -> Result<&Recipe, PickError> {
        pick::pick_random(&self.recipes, &mut rand::rng())
    }
}
