//! Permission matrix state for the role editor grid
//!
//! Rows are resources, columns are actions. Selection editing returns a
//! new set and leaves the input untouched.

use serde::Serialize;
use std::collections::HashSet;

use super::catalog::PermissionCatalog;

/// How much of a resource or module is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    All,
    Partial,
    None,
}

impl SelectionState {
    fn from_counts(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            SelectionState::None
        } else if selected == total {
            SelectionState::All
        } else {
            SelectionState::Partial
        }
    }
}

/// One action cell in a matrix row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub code: String,
    pub action: String,
    /// Display name and tooltip text from the catalog
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub checked: bool,
}

/// One resource row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub resource: String,
    pub module: String,
    pub state: SelectionState,
    pub cells: Vec<MatrixCell>,
}

#[derive(Debug, Clone, Copy)]
pub struct PermissionMatrix<'a> {
    catalog: &'a PermissionCatalog,
}

impl<'a> PermissionMatrix<'a> {
    pub fn new(catalog: &'a PermissionCatalog) -> Self {
        Self { catalog }
    }

    fn resource_codes(&self, resource: &str) -> Vec<&'a str> {
        self.catalog
            .permissions()
            .iter()
            .filter(|p| p.resource_key() == Some(resource))
            .map(|p| p.code.as_str())
            .collect()
    }

    fn module_codes(&self, module: &str) -> Vec<&'a str> {
        self.catalog
            .permissions()
            .iter()
            .filter(|p| p.module == module && p.resource_key().is_some())
            .map(|p| p.code.as_str())
            .collect()
    }

    pub fn resource_state(&self, resource: &str, selected: &HashSet<String>) -> SelectionState {
        state_of(&self.resource_codes(resource), selected)
    }

    pub fn module_state(&self, module: &str, selected: &HashSet<String>) -> SelectionState {
        state_of(&self.module_codes(module), selected)
    }

    /// Rows in catalog order; `selected` may contain wildcards
    pub fn rows(&self, selected: &HashSet<String>) -> Vec<MatrixRow> {
        let effective = self.catalog.expand(selected);
        let permissions = self.catalog.permissions();

        self.catalog
            .resource_groups()
            .iter()
            .map(|group| {
                let module = permissions
                    .iter()
                    .find(|p| p.resource_key() == Some(group.resource))
                    .map(|p| p.module.clone())
                    .unwrap_or_default();

                let cells: Vec<MatrixCell> = group
                    .codes
                    .iter()
                    .map(|code| {
                        let permission = self.catalog.get(code);
                        MatrixCell {
                            code: code.to_string(),
                            action: permission.map(|p| p.action.clone()).unwrap_or_default(),
                            name: permission.map(|p| p.name.clone()).unwrap_or_default(),
                            description: permission.and_then(|p| p.description.clone()),
                            checked: effective.contains(*code),
                        }
                    })
                    .collect();

                let checked = cells.iter().filter(|c| c.checked).count();
                MatrixRow {
                    resource: group.resource.to_string(),
                    module,
                    state: SelectionState::from_counts(checked, cells.len()),
                    cells,
                }
            })
            .collect()
    }

    pub fn toggle_permission(&self, selected: &HashSet<String>, code: &str) -> HashSet<String> {
        let mut next = selected.clone();
        if !next.remove(code) {
            next.insert(code.to_string());
        }
        next
    }

    /// Select every action of the resource unless all are already selected,
    /// in which case clear them
    pub fn toggle_resource(&self, selected: &HashSet<String>, resource: &str) -> HashSet<String> {
        let codes = self.resource_codes(resource);
        let mut next = selected.clone();

        if state_of(&codes, selected) == SelectionState::All {
            for code in codes {
                next.remove(code);
            }
        } else {
            next.extend(codes.into_iter().map(str::to_string));
        }
        next
    }

    pub fn select_all(&self) -> HashSet<String> {
        self.catalog.codes().map(str::to_string).collect()
    }

    pub fn clear(&self) -> HashSet<String> {
        HashSet::new()
    }
}

fn state_of(codes: &[&str], selected: &HashSet<String>) -> SelectionState {
    let checked = codes.iter().filter(|c| selected.contains(**c)).count();
    SelectionState::from_counts(checked, codes.len())
}
