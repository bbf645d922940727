//! Syntactic wildcard checks

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Universal wildcard granting every permission in the catalog
pub const FULL_ACCESS: &str = "*.*";

/// Suffix marking a resource wildcard
pub const RESOURCE_WILDCARD_SUFFIX: &str = ".*";

static RESOURCE_WILDCARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+\.\*$").expect("Invalid resource wildcard regex")
});

/// Kind of wildcard a code represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardType {
    /// `*.*`
    Full,
    /// `resource.*`
    Module,
    /// Concrete or malformed code
    None,
}

impl WildcardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WildcardType::Full => "full",
            WildcardType::Module => "module",
            WildcardType::None => "none",
        }
    }
}

impl std::fmt::Display for WildcardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True iff the code contains `*` anywhere
pub fn is_wildcard(code: &str) -> bool {
    code.contains('*')
}

/// Classify a code by suffix alone; the resource is not checked against any catalog
pub fn classify(code: &str) -> WildcardType {
    if code == FULL_ACCESS {
        WildcardType::Full
    } else if code.ends_with(RESOURCE_WILDCARD_SUFFIX) {
        WildcardType::Module
    } else {
        WildcardType::None
    }
}

/// Alias of [`classify`] matching the role editor's naming
pub fn get_wildcard_type(code: &str) -> WildcardType {
    classify(code)
}

/// Reject partially formed patterns such as `*.items` or `a.b.*`
///
/// Codes without `*` are trivially valid.
pub fn is_valid_wildcard(code: &str) -> bool {
    if !is_wildcard(code) {
        return true;
    }
    code == FULL_ACCESS || RESOURCE_WILDCARD_PATTERN.is_match(code)
}

/// `resource.*` for the given resource
pub fn resource_wildcard(resource: &str) -> String {
    format!("{}{}", resource, RESOURCE_WILDCARD_SUFFIX)
}

/// Resource named by a `resource.*` code
pub(crate) fn wildcard_resource(code: &str) -> Option<&str> {
    code.strip_suffix(RESOURCE_WILDCARD_SUFFIX)
}
