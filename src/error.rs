use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a recipe catalog.
///
/// A `LoadError` is never fatal to the caller: the store falls back to an empty
/// catalog and the error is handed back for display.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Recipe file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read recipe file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse recipe JSON from '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while reading filter choices from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown categorical field '{0}'")]
    UnknownField(String),
}

/// Errors that can occur when picking a random recipe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    #[error("No recipes to pick from")]
    Empty,
}

/// Errors that can occur while loading application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid configuration value for '{key}': {message}")]
    Invalid { key: String, message: String },
}
