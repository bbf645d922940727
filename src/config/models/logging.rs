//! Logging configuration

use serde::{Deserialize, Serialize};

/// Log levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Merge logging configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.level != default_level() {
            self.level = other.level;
        }
        if other.json {
            self.json = other.json;
        }
        self
    }
}

fn default_level() -> String {
    "info".to_string()
}
