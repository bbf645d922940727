//! Configuration management for permset
//!
//! Configuration comes from a YAML file, from `PERMSET_*` environment
//! variables (a `.env` file is honoured), or both; the environment wins.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PermsetError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub settings: PermsetConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PermsetError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let settings: PermsetConfig = if content.trim().is_empty() {
            PermsetConfig::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| PermsetError::config(format!("Failed to parse config: {}", e)))?
        };

        let config = Self { settings };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let config = Self {
            settings: PermsetConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::from_env();
        };

        let _ = dotenvy::dotenv();
        let settings = Self::from_file(path)
            .await?
            .settings
            .with_env_overrides(|key| std::env::var(key).ok())?;

        let config = Self { settings };
        config.validate()?;
        Ok(config)
    }

    pub fn compression(&self) -> &CompressionConfig {
        &self.settings.compression
    }

    pub fn danger(&self) -> &DangerConfig {
        &self.settings.danger
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.settings.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.settings.validate().map_err(PermsetError::Config)
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.settings = self.settings.merge(other.settings);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.settings)
            .map_err(|e| PermsetError::config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.settings)
            .map_err(|e| PermsetError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
