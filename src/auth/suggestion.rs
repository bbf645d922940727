//! Wildcard suggestions for the role editor banner

use serde::Serialize;
use std::collections::HashSet;

use super::catalog::PermissionCatalog;
use super::wildcard::{self, FULL_ACCESS};

/// A wildcard that could replace part of the selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WildcardSuggestion {
    pub wildcard: String,
    /// Concrete codes the wildcard replaces, in catalog order
    pub replaces: Vec<String>,
}

/// Suggest wildcards for fully selected resource groups
///
/// A selection covering the whole catalog yields a single `*.*`
/// suggestion. Groups smaller than `min_group_size` (and never fewer
/// than two members) are not suggested.
pub fn suggest_wildcards<I>(
    selected: I,
    catalog: &PermissionCatalog,
    min_group_size: usize,
) -> Vec<WildcardSuggestion>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let owned: Vec<String> = selected
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .collect();
    let lookup: HashSet<&str> = owned.iter().map(String::as_str).collect();

    if wildcard::covers_catalog(&lookup, catalog.permissions()) {
        return vec![WildcardSuggestion {
            wildcard: FULL_ACCESS.to_string(),
            replaces: catalog.codes().map(str::to_string).collect(),
        }];
    }

    let min_group_size = min_group_size.max(2);
    catalog
        .resource_groups()
        .iter()
        .filter(|group| group.len() >= min_group_size)
        .filter(|group| group.codes.iter().all(|code| lookup.contains(code)))
        .map(|group| WildcardSuggestion {
            wildcard: wildcard::resource_wildcard(group.resource),
            replaces: group.codes.iter().map(|c| c.to_string()).collect(),
        })
        .collect()
}
