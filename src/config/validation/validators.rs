//! Validators for the configuration models

use super::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for PermsetConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating permset configuration");

        self.compression
            .validate()
            .map_err(|e| format!("compression: {}", e))?;
        self.danger
            .validate()
            .map_err(|e| format!("danger: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("logging: {}", e))?;

        Ok(())
    }
}

impl Validate for CompressionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.min_group_size < 2 {
            return Err(format!(
                "min_group_size must be at least 2, got {}",
                self.min_group_size
            ));
        }

        Ok(())
    }
}

impl Validate for DangerConfig {
    fn validate(&self) -> Result<(), String> {
        validate_segments("dangerous_actions", &self.dangerous_actions)?;
        validate_segments("sensitive_resources", &self.sensitive_resources)?;
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}

/// Entries are single code segments: non-empty, no separator, no wildcard
fn validate_segments(field: &str, entries: &[String]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.trim().is_empty() {
            return Err(format!("{} cannot contain empty entries", field));
        }
        if entry.contains('.') || entry.contains('*') {
            return Err(format!(
                "{} entry '{}' must not contain '.' or '*'",
                field, entry
            ));
        }
        if !seen.insert(entry.as_str()) {
            return Err(format!("Duplicate {} entry: {}", field, entry));
        }
    }
    Ok(())
}
