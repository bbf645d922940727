//! Compression and expansion of permission selections

use std::collections::HashSet;
use tracing::debug;

use super::grouping::ResourceGroups;
use super::patterns::{FULL_ACCESS, resource_wildcard, wildcard_resource};
use crate::auth::types::{Permission, resource_of};
use crate::config::CompressionConfig;

/// Expand wildcard codes into the concrete codes they cover
///
/// `*.*` contributes every catalog code and `resource.*` every code of that
/// resource; anything else is passed through untouched, even if the
/// catalog does not know it. The result holds no wildcards that the
/// catalog can resolve.
pub fn expand<I>(selected: I, catalog: &[Permission]) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut expanded = HashSet::new();

    for code in selected {
        let code = code.as_ref();
        if code == FULL_ACCESS {
            expanded.extend(catalog.iter().map(|p| p.code.clone()));
        } else if wildcard_resource(code).is_some() {
            // Resource is everything before the first separator
            if let Some(resource) = resource_of(code) {
                expanded.extend(
                    catalog
                        .iter()
                        .filter(|p| p.resource_key() == Some(resource))
                        .map(|p| p.code.clone()),
                );
            }
        } else {
            expanded.insert(code.to_string());
        }
    }

    expanded
}

/// Replace fully selected resource groups with `resource.*`
///
/// The selection must hold concrete codes; wildcard strings in it are
/// treated as opaque leftovers. Output is the emitted wildcards in
/// catalog first-appearance order followed by the remaining codes in
/// selection order. Single-member groups are never collapsed.
pub fn compress<I>(selected: I, catalog: &[Permission]) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    compress_with(selected, catalog, &CompressionConfig::default())
}

/// [`compress`] with explicit group size and full-access behaviour
pub fn compress_with<I>(selected: I, catalog: &[Permission], config: &CompressionConfig) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let ordered = dedup_in_order(selected);
    let lookup: HashSet<&str> = ordered.iter().map(String::as_str).collect();

    if config.full_access_shortcut && covers_catalog(&lookup, catalog) {
        debug!("Selection covers the whole catalog, compressing to {}", FULL_ACCESS);
        return vec![FULL_ACCESS.to_string()];
    }

    let min_group_size = config.min_group_size.max(2);
    let groups = ResourceGroups::build(catalog);

    let mut wildcards = Vec::new();
    let mut consumed: HashSet<&str> = HashSet::new();

    for group in &groups {
        if group.len() < min_group_size {
            continue;
        }
        if group.codes.iter().all(|code| lookup.contains(code)) {
            wildcards.push(resource_wildcard(group.resource));
            consumed.extend(group.codes.iter().copied());
        }
    }

    debug!(
        "Compressed {} codes into {} wildcards",
        consumed.len(),
        wildcards.len()
    );

    let leftovers = ordered
        .iter()
        .filter(|code| !consumed.contains(code.as_str()))
        .cloned();

    wildcards.into_iter().chain(leftovers).collect()
}

/// True iff the selection is exactly the catalog's code set
///
/// An empty selection covers an empty catalog. A selection of catalog
/// size holding a stale code does not.
pub fn covers_catalog(selected: &HashSet<&str>, catalog: &[Permission]) -> bool {
    let catalog_codes: HashSet<&str> = catalog.iter().map(|p| p.code.as_str()).collect();
    selected.len() == catalog_codes.len() && catalog_codes.iter().all(|c| selected.contains(c))
}

fn dedup_in_order<I>(selected: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    selected
        .into_iter()
        .filter_map(|code| {
            let code = code.as_ref();
            seen.insert(code.to_string()).then(|| code.to_string())
        })
        .collect()
}
