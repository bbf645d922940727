//! Permission catalog snapshot
//!
//! The catalog is fetched once per role-editor session and treated as
//! immutable; every wildcard operation resolves against it.

mod loader;

use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::types::{CODE_SEPARATOR, Permission};
use super::wildcard::{self, ResourceGroups};
use crate::config::CompressionConfig;
use crate::utils::error::{PermsetError, Result};

/// Immutable list of known permissions with a code index
#[derive(Debug, Clone, Default)]
pub struct PermissionCatalog {
    permissions: Vec<Permission>,
    by_code: HashMap<String, usize>,
}

impl PermissionCatalog {
    pub fn new(permissions: Vec<Permission>) -> Self {
        let mut by_code = HashMap::with_capacity(permissions.len());
        for (slot, permission) in permissions.iter().enumerate() {
            // First occurrence wins for lookups
            by_code.entry(permission.code.clone()).or_insert(slot);
        }
        debug!("Built permission catalog with {} entries", permissions.len());
        Self {
            permissions,
            by_code,
        }
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Codes in catalog order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(|p| p.code.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&Permission> {
        self.by_code.get(code).map(|&slot| &self.permissions[slot])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Resources in first-appearance order with their codes
    pub fn resource_groups(&self) -> ResourceGroups<'_> {
        ResourceGroups::build(&self.permissions)
    }

    /// Modules in first-appearance order with the resources they contain
    pub fn module_groups(&self) -> Vec<(&str, Vec<&str>)> {
        let mut modules: Vec<(&str, Vec<&str>)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for permission in &self.permissions {
            let Some(resource) = permission.resource_key() else {
                continue;
            };
            let slot = *index.entry(permission.module.as_str()).or_insert_with(|| {
                modules.push((permission.module.as_str(), Vec::new()));
                modules.len() - 1
            });
            let resources = &mut modules[slot].1;
            if !resources.contains(&resource) {
                resources.push(resource);
            }
        }

        modules
    }

    /// Catalog without inactive permissions
    pub fn active_only(&self) -> Self {
        Self::new(
            self.permissions
                .iter()
                .filter(|p| p.is_active)
                .cloned()
                .collect(),
        )
    }

    pub fn compress<I>(&self, selected: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        wildcard::compress(selected, &self.permissions)
    }

    pub fn compress_with<I>(&self, selected: I, config: &CompressionConfig) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        wildcard::compress_with(selected, &self.permissions, config)
    }

    pub fn expand<I>(&self, selected: I) -> HashSet<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        wildcard::expand(selected, &self.permissions)
    }

    /// Concrete codes in the selection the catalog does not know, in selection order
    pub fn unknown_codes<I>(&self, selected: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut seen = HashSet::new();
        selected
            .into_iter()
            .map(|code| code.as_ref().to_string())
            .filter(|code| !wildcard::is_wildcard(code) && !self.contains(code))
            .filter(|code| seen.insert(code.clone()))
            .collect()
    }

    /// Check catalog consistency
    ///
    /// Rejects duplicate codes, wildcard codes, codes without a resource
    /// segment, and codes whose resource segment disagrees with `resource`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for permission in &self.permissions {
            let code = permission.code.as_str();
            if !seen.insert(code) {
                return Err(PermsetError::validation(format!(
                    "Duplicate permission code: {}",
                    code
                )));
            }
            if wildcard::is_wildcard(code) {
                return Err(PermsetError::validation(format!(
                    "Catalog entries must be concrete, found wildcard: {}",
                    code
                )));
            }
            let Some(resource) = permission.resource_key() else {
                return Err(PermsetError::validation(format!(
                    "Permission code '{}' must look like resource{}action",
                    code, CODE_SEPARATOR
                )));
            };
            if !permission.resource.is_empty() && permission.resource != resource {
                return Err(PermsetError::validation(format!(
                    "Permission code '{}' does not match its resource '{}'",
                    code, permission.resource
                )));
            }
        }

        Ok(())
    }
}

impl From<Vec<Permission>> for PermissionCatalog {
    fn from(permissions: Vec<Permission>) -> Self {
        Self::new(permissions)
    }
}
