//! Configuration data models
//!
//! This module defines all configuration structures used by permset.

pub mod compression;
pub mod danger;
pub mod logging;

pub use compression::*;
pub use danger::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermsetConfig {
    /// Compression behaviour
    #[serde(default)]
    pub compression: CompressionConfig,
    /// Dangerous permission detection
    #[serde(default)]
    pub danger: DangerConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PermsetConfig {
    /// Merge configurations (other takes precedence where it differs from defaults)
    pub fn merge(mut self, other: Self) -> Self {
        self.compression = self.compression.merge(other.compression);
        self.danger = self.danger.merge(other.danger);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
