//! Permission type definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Separator between resource and action in a permission code
pub const CODE_SEPARATOR: char = '.';

/// Permission definition as supplied by the catalog provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    /// Backend identifier
    #[serde(default)]
    pub id: String,
    /// `"<resource>.<action>"`
    pub code: String,
    /// Resource this permission applies to
    #[serde(default)]
    pub resource: String,
    /// Action this permission allows
    #[serde(default)]
    pub action: String,
    /// Application module grouping resources in the role editor
    #[serde(default)]
    pub module: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Permission description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inactive permissions stay in the catalog but cannot be granted
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Provider-specific attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Map<String, Value>>,
}

impl Permission {
    /// Create an active permission with a fresh id
    pub fn new(resource: &str, action: &str, module: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            code: Self::generate_code(resource, action),
            resource: resource.to_string(),
            action: action.to_string(),
            module: module.to_string(),
            name: format!("{} {}", capitalize(action), resource),
            description: None,
            is_active: true,
            extra_data: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra_data
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Build a code from resource and action
    pub fn generate_code(resource: &str, action: &str) -> String {
        format!("{}{}{}", resource, CODE_SEPARATOR, action)
    }

    /// Resource segment of the code, i.e. everything before the first `.`
    ///
    /// Returns `None` for codes without a separator or with an empty prefix;
    /// such permissions never take part in resource grouping.
    pub fn resource_key(&self) -> Option<&str> {
        resource_of(&self.code)
    }

    /// Look up a value in `extra_data`
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra_data.as_ref().and_then(|extra| extra.get(key))
    }
}

/// Resource segment of an arbitrary code
pub fn resource_of(code: &str) -> Option<&str> {
    code.split_once(CODE_SEPARATOR)
        .map(|(resource, _)| resource)
        .filter(|resource| !resource.is_empty())
}

/// Action segment of an arbitrary code (everything after the first `.`)
pub fn action_of(code: &str) -> Option<&str> {
    code.split_once(CODE_SEPARATOR)
        .map(|(_, action)| action)
        .filter(|action| !action.is_empty())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn default_active() -> bool {
    true
}
