//! Role editor store
//!
//! Holds the role being edited as an explicit [`RoleDraft`] value and
//! exposes setters that notify subscribed listeners. All permission logic
//! is delegated to the catalog, matrix, danger and suggestion modules; the
//! editor only keeps the selection ordered and deduplicated.

mod listener;

pub use listener::{RoleEditorListener, SubscriptionId};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use self::listener::Listeners;
use super::catalog::PermissionCatalog;
use super::danger::{self, DangerousPermission};
use super::matrix::{MatrixRow, PermissionMatrix};
use super::suggestion::{self, WildcardSuggestion};
use super::types::resource_of;
use super::wildcard::{self, FULL_ACCESS, WildcardType};
use crate::config::PermsetConfig;
use crate::utils::error::{PermsetError, Result};

/// Role as currently edited; `selected` holds concrete codes in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub selected: Vec<String>,
}

/// Validated role ready to hand to the role-submission caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSubmission {
    pub name: String,
    pub description: String,
    /// Compressed codes, wildcards first
    pub permissions: Vec<String>,
}

#[derive(Debug)]
pub struct RoleEditor {
    catalog: Arc<PermissionCatalog>,
    config: PermsetConfig,
    draft: RoleDraft,
    listeners: Listeners,
}

impl RoleEditor {
    pub fn new(catalog: Arc<PermissionCatalog>) -> Self {
        Self::with_config(catalog, PermsetConfig::default())
    }

    pub fn with_config(catalog: Arc<PermissionCatalog>, config: PermsetConfig) -> Self {
        Self {
            catalog,
            config,
            draft: RoleDraft::default(),
            listeners: Listeners::new(),
        }
    }

    /// Start editing an existing role whose stored codes may contain wildcards
    pub fn from_role<I>(
        catalog: Arc<PermissionCatalog>,
        name: impl Into<String>,
        description: impl Into<String>,
        codes: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::from_role_with_config(catalog, PermsetConfig::default(), name, description, codes)
    }

    /// [`RoleEditor::from_role`] under an explicit configuration
    pub fn from_role_with_config<I>(
        catalog: Arc<PermissionCatalog>,
        config: PermsetConfig,
        name: impl Into<String>,
        description: impl Into<String>,
        codes: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut editor = Self::with_config(catalog, config);
        editor.draft.name = name.into();
        editor.draft.description = description.into();
        editor.draft.selected = editor.expand_ordered(codes);
        editor
    }

    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: RoleEditorListener + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn draft(&self) -> &RoleDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.changed();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.changed();
    }

    /// Replace the selection; wildcards are expanded against the catalog
    pub fn set_selection<I>(&mut self, codes: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.draft.selected = self.expand_ordered(codes);
        self.changed();
    }

    /// Toggle one code
    ///
    /// `resource.*` toggles the whole resource and `*.*` toggles the whole
    /// catalog, since the draft only ever holds concrete codes.
    pub fn toggle_permission(&mut self, code: &str) {
        if code == FULL_ACCESS {
            if self.has_full_access() {
                self.clear();
            } else {
                self.select_all();
            }
            return;
        }
        if wildcard::classify(code) == WildcardType::Module && wildcard::is_valid_wildcard(code) {
            if let Some(resource) = resource_of(code) {
                self.toggle_resource(resource);
                return;
            }
        }

        if let Some(pos) = self.draft.selected.iter().position(|c| c == code) {
            self.draft.selected.remove(pos);
        } else {
            let added: Vec<String> = self
                .expand_ordered([code])
                .into_iter()
                .filter(|c| !self.draft.selected.contains(c))
                .collect();
            self.draft.selected.extend(added);
        }
        self.changed();
    }

    pub fn toggle_resource(&mut self, resource: &str) {
        let current = self.selected_set();
        let next = PermissionMatrix::new(&self.catalog).toggle_resource(&current, resource);
        self.retain_and_append(&next);
        self.changed();
    }

    pub fn select_all(&mut self) {
        self.draft.selected = self.catalog.codes().map(str::to_string).collect();
        self.changed();
    }

    pub fn clear(&mut self) {
        self.draft.selected.clear();
        self.changed();
    }

    /// Concrete codes granted by the draft
    pub fn effective(&self) -> HashSet<String> {
        self.catalog.expand(&self.draft.selected)
    }

    pub fn compressed(&self) -> Vec<String> {
        self.catalog
            .compress_with(&self.draft.selected, &self.config.compression)
    }

    pub fn suggestions(&self) -> Vec<WildcardSuggestion> {
        suggestion::suggest_wildcards(
            &self.draft.selected,
            &self.catalog,
            self.config.compression.min_group_size,
        )
    }

    /// Danger findings for what would actually be submitted
    pub fn warnings(&self) -> Vec<DangerousPermission> {
        danger::assess(self.compressed(), &self.catalog, &self.config.danger)
    }

    pub fn matrix_rows(&self) -> Vec<MatrixRow> {
        PermissionMatrix::new(&self.catalog).rows(&self.selected_set())
    }

    /// Whether the selection grants every catalog permission, whatever the
    /// compression settings
    pub fn has_full_access(&self) -> bool {
        let lookup: HashSet<&str> = self.draft.selected.iter().map(String::as_str).collect();
        wildcard::covers_catalog(&lookup, self.catalog.permissions())
    }

    pub fn validate(&self) -> Result<()> {
        if self.draft.name.trim().is_empty() {
            return Err(PermsetError::validation("Role name is required"));
        }
        if self.draft.selected.is_empty() {
            return Err(PermsetError::validation(
                "Select at least one permission",
            ));
        }

        let malformed: Vec<&str> = self
            .draft
            .selected
            .iter()
            .map(String::as_str)
            .filter(|c| !wildcard::is_valid_wildcard(c))
            .collect();
        if !malformed.is_empty() {
            return Err(PermsetError::validation(format!(
                "Invalid wildcard patterns: {}",
                malformed.join(", ")
            )));
        }

        let unknown = self.catalog.unknown_codes(&self.draft.selected);
        if !unknown.is_empty() {
            return Err(PermsetError::validation(format!(
                "Unknown permission codes: {}",
                unknown.join(", ")
            )));
        }

        Ok(())
    }

    pub fn submission(&self) -> Result<RoleSubmission> {
        self.validate()?;
        Ok(RoleSubmission {
            name: self.draft.name.trim().to_string(),
            description: self.draft.description.trim().to_string(),
            permissions: self.compressed(),
        })
    }

    fn selected_set(&self) -> HashSet<String> {
        self.draft.selected.iter().cloned().collect()
    }

    /// Keep existing order for codes that stay selected and append new ones in catalog order
    fn retain_and_append(&mut self, next: &HashSet<String>) {
        self.draft.selected.retain(|c| next.contains(c));
        let present: HashSet<String> = self.selected_set();
        let added: Vec<String> = self
            .catalog
            .codes()
            .filter(|c| next.contains(*c) && !present.contains(*c))
            .map(str::to_string)
            .collect();
        self.draft.selected.extend(added);
    }

    /// Resolve wildcards in catalog order, keep concrete codes as given, drop duplicates
    fn expand_ordered<I>(&self, codes: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut ordered = Vec::new();

        for code in codes {
            let code = code.as_ref();
            let resolved: Vec<String> = if wildcard::is_wildcard(code)
                && wildcard::is_valid_wildcard(code)
            {
                let covered = self.catalog.expand([code]);
                self.catalog
                    .codes()
                    .filter(|c| covered.contains(*c))
                    .map(str::to_string)
                    .collect()
            } else {
                vec![code.to_string()]
            };

            for code in resolved {
                if seen.insert(code.clone()) {
                    ordered.push(code);
                }
            }
        }

        ordered
    }

    fn changed(&self) {
        debug!(
            role = %self.draft.name,
            selected = self.draft.selected.len(),
            "Role draft changed"
        );
        self.listeners.notify(&self.draft);
    }
}
