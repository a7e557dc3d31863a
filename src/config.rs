use crate::error::ConfigError;
use crate::session::DEFAULT_PAGE_SIZE;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration shared by the front-ends.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path to the recipe catalog JSON file
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Recipes revealed per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Upper prep-time bound offered when the catalog is empty
    #[serde(default = "default_fallback_prep_max")]
    pub fallback_prep_max: u32,
    /// Upper cook-time bound offered when the catalog is empty
    #[serde(default = "default_fallback_cook_max")]
    pub fallback_cook_max: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
            fallback_prep_max: default_fallback_prep_max(),
            fallback_cook_max: default_fallback_cook_max(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("recipes.json")
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_fallback_prep_max() -> u32 {
    60
}

fn default_fallback_cook_max() -> u32 {
    90
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with KONDATE__ prefix (e.g. KONDATE__PAGE_SIZE)
    /// 2. kondate.toml in the current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(File::with_name("kondate").required(false))
    }

    /// Load configuration from an explicit TOML file, still honouring the environment.
    pub fn load_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path: PathBuf = path.into();
        Self::load_from(File::from(path).required(true))
    }

    fn load_from<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("KONDATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
