//! Application configuration module for lectio
//!
//! Provides TOML-based configuration with environment variable override support.
//! Priority: CLI args > Environment variables > Config file > Defaults

use super::search_config::DEFAULT_MAX_RESULTS;
use super::SearchConfig;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding translation, bookmark and settings files
    #[serde(default)]
    data_dir: Option<String>,

    /// Cap on search results; unset layers defer to lower-priority ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_results: Option<usize>,

    /// Translation used when settings name none
    #[serde(default)]
    default_translation: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            max_results: None,
            default_translation: None,
        }
    }
}

impl AppConfig {
    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Load the config file if present, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!("{}; using defaults", e);
            Self::default()
        })
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(data_dir) = std::env::var("LECTIO_DATA_DIR") {
            config.data_dir = Some(data_dir);
        }

        if let Ok(max) = std::env::var("LECTIO_MAX_RESULTS") {
            match max.parse() {
                Ok(n) => config.max_results = Some(n),
                Err(_) => tracing::warn!("Ignoring invalid LECTIO_MAX_RESULTS: {}", max),
            }
        }

        if let Ok(translation) = std::env::var("LECTIO_TRANSLATION") {
            config.default_translation = Some(translation);
        }

        config
    }

    /// Merge with another config (other takes priority for every value it sets)
    pub fn merge_with(&self, other: &Self) -> Self {
        Self {
            data_dir: other.data_dir.clone().or_else(|| self.data_dir.clone()),
            max_results: other.max_results.or(self.max_results),
            default_translation: other
                .default_translation
                .clone()
                .or_else(|| self.default_translation.clone()),
        }
    }

    /// Override data_dir
    pub fn with_data_dir(mut self, dir: &str) -> Self {
        self.data_dir = Some(dir.to_string());
        self
    }

    /// Override max_results
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = Some(n);
        self
    }

    /// Override default_translation
    pub fn with_default_translation(mut self, id: &str) -> Self {
        self.default_translation = Some(id.to_string());
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_results == Some(0) {
            return Err(anyhow!("max_results must be greater than 0"));
        }
        if matches!(&self.data_dir, Some(d) if d.trim().is_empty()) {
            return Err(anyhow!("data_dir must not be empty"));
        }
        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        let resolved = Self {
            max_results: Some(self.max_results()),
            ..self.clone()
        };
        toml::to_string_pretty(&resolved).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    /// Search options derived from this config
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new().with_max_results(self.max_results())
    }

    // Getters
    pub fn data_dir(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }

    pub fn max_results(&self) -> usize {
        self.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }

    pub fn default_translation(&self) -> Option<&str> {
        self.default_translation.as_deref()
    }
}
