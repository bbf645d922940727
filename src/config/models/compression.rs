//! Compression configuration

use serde::{Deserialize, Serialize};

/// Knobs for wildcard compression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Smallest resource group that may collapse into `resource.*`
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,
    /// Collapse a selection covering the whole catalog into `*.*`
    #[serde(default = "default_true")]
    pub full_access_shortcut: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            min_group_size: default_min_group_size(),
            full_access_shortcut: true,
        }
    }
}

impl CompressionConfig {
    /// Merge compression configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.min_group_size != default_min_group_size() {
            self.min_group_size = other.min_group_size;
        }
        if !other.full_access_shortcut {
            self.full_access_shortcut = other.full_access_shortcut;
        }
        self
    }
}

/// Single-member groups never compress
pub fn default_min_group_size() -> usize {
    2
}

fn default_true() -> bool {
    true
}
