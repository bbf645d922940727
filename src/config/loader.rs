//! Environment variable overrides
//!
//! Recognised variables:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PERMSET_MIN_GROUP_SIZE` | `compression.min_group_size` |
//! | `PERMSET_FULL_ACCESS_SHORTCUT` | `compression.full_access_shortcut` |
//! | `PERMSET_DANGEROUS_ACTIONS` | `danger.dangerous_actions` (comma separated) |
//! | `PERMSET_SENSITIVE_RESOURCES` | `danger.sensitive_resources` (comma separated) |
//! | `PERMSET_LOG_LEVEL` | `logging.level` |
//! | `PERMSET_LOG_JSON` | `logging.json` |

use super::models::PermsetConfig;
use crate::utils::error::{PermsetError, Result};
use tracing::debug;

impl PermsetConfig {
    /// Apply overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides using an arbitrary variable lookup
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        if let Some(size) = lookup("PERMSET_MIN_GROUP_SIZE") {
            self.compression.min_group_size = size.trim().parse().map_err(|e| {
                PermsetError::parsing(format!("Invalid PERMSET_MIN_GROUP_SIZE: {}", e))
            })?;
        }
        if let Some(flag) = lookup("PERMSET_FULL_ACCESS_SHORTCUT") {
            self.compression.full_access_shortcut = parse_bool("PERMSET_FULL_ACCESS_SHORTCUT", &flag)?;
        }
        if let Some(actions) = lookup("PERMSET_DANGEROUS_ACTIONS") {
            self.danger.dangerous_actions = split_list(&actions);
        }
        if let Some(resources) = lookup("PERMSET_SENSITIVE_RESOURCES") {
            self.danger.sensitive_resources = split_list(&resources);
        }
        if let Some(level) = lookup("PERMSET_LOG_LEVEL") {
            self.logging.level = level.trim().to_lowercase();
        }
        if let Some(flag) = lookup("PERMSET_LOG_JSON") {
            self.logging.json = parse_bool("PERMSET_LOG_JSON", &flag)?;
        }

        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(PermsetError::parsing(format!(
            "Invalid {}: expected a boolean, got '{}'",
            key, other
        ))),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
