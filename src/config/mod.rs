use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub corpus: CorpusConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    pub restaurants_path: PathBuf,
    pub recipes_path: PathBuf,
    /// Optional precomputed ingredient -> recipe-id index. Derived from the
    /// recipe records when absent.
    pub ingredient_index_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let restaurants_path = std::env::var("RESTAURANTS_PATH")
            .unwrap_or_else(|_| "./data/restaurants.json".to_string())
            .into();

        let recipes_path = std::env::var("RECIPES_PATH")
            .unwrap_or_else(|_| "./data/recipes.json".to_string())
            .into();

        let ingredient_index_path = std::env::var("INGREDIENT_INDEX_PATH").ok().map(Into::into);

        let default_limit = std::env::var("DEFAULT_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DEFAULT_LIMIT value".to_string()))?;

        let max_limit = std::env::var("MAX_LIMIT")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_LIMIT value".to_string()))?;

        Ok(Settings {
            corpus: CorpusConfig {
                restaurants_path,
                recipes_path,
                ingredient_index_path,
            },
            pagination: PaginationConfig {
                default_limit,
                max_limit,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.pagination.default_limit == 0 {
            return Err(Error::Config(
                "Default page limit must be non-zero".to_string(),
            ));
        }

        if self.pagination.max_limit < self.pagination.default_limit {
            return Err(Error::Config(
                "Maximum page limit must not be below the default limit".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings {
            corpus: CorpusConfig {
                restaurants_path: "./data/restaurants.json".into(),
                recipes_path: "./data/recipes.json".into(),
                ingredient_index_path: None,
            },
            pagination: PaginationConfig {
                default_limit: 100,
                max_limit: 1000,
            },
        };

        assert!(settings.validate().is_ok());

        settings.pagination.default_limit = 0;
        assert!(settings.validate().is_err());

        settings.pagination.default_limit = 100;
        settings.pagination.max_limit = 10;
        assert!(settings.validate().is_err());
    }
}
