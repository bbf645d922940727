//! Dangerous permission configuration

use serde::{Deserialize, Serialize};

/// Which concrete permissions the role editor should warn about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerConfig {
    /// Actions that are destructive on any resource
    #[serde(default = "default_dangerous_actions")]
    pub dangerous_actions: Vec<String>,
    /// Resources where any grant affects access control itself
    #[serde(default = "default_sensitive_resources")]
    pub sensitive_resources: Vec<String>,
}

impl Default for DangerConfig {
    fn default() -> Self {
        Self {
            dangerous_actions: default_dangerous_actions(),
            sensitive_resources: default_sensitive_resources(),
        }
    }
}

impl DangerConfig {
    /// Merge danger configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.dangerous_actions != default_dangerous_actions() {
            self.dangerous_actions = other.dangerous_actions;
        }
        if other.sensitive_resources != default_sensitive_resources() {
            self.sensitive_resources = other.sensitive_resources;
        }
        self
    }

    pub fn is_dangerous_action(&self, action: &str) -> bool {
        self.dangerous_actions.iter().any(|a| a == action)
    }

    pub fn is_sensitive_resource(&self, resource: &str) -> bool {
        self.sensitive_resources.iter().any(|r| r == resource)
    }
}

pub fn default_dangerous_actions() -> Vec<String> {
    vec!["delete".to_string()]
}

pub fn default_sensitive_resources() -> Vec<String> {
    vec!["roles".to_string(), "users".to_string()]
}
