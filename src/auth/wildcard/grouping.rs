//! Insertion-ordered grouping of catalog codes by resource

use std::collections::HashMap;

use crate::auth::types::Permission;

/// Codes sharing one resource, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup<'a> {
    pub resource: &'a str,
    pub codes: Vec<&'a str>,
}

impl ResourceGroup<'_> {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Resource groups keyed by first appearance in the catalog
///
/// Built in one linear scan so that group order never depends on hashing.
#[derive(Debug, Clone, Default)]
pub struct ResourceGroups<'a> {
    groups: Vec<ResourceGroup<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> ResourceGroups<'a> {
    pub fn build(catalog: &'a [Permission]) -> Self {
        let mut groups: Vec<ResourceGroup<'a>> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();

        for permission in catalog {
            let Some(resource) = permission.resource_key() else {
                continue;
            };
            let slot = *index.entry(resource).or_insert_with(|| {
                groups.push(ResourceGroup {
                    resource,
                    codes: Vec::new(),
                });
                groups.len() - 1
            });
            let group = &mut groups[slot];
            if !group.codes.contains(&permission.code.as_str()) {
                group.codes.push(permission.code.as_str());
            }
        }

        Self { groups, index }
    }

    pub fn get(&self, resource: &str) -> Option<&ResourceGroup<'a>> {
        self.index.get(resource).map(|&slot| &self.groups[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'g, 'a> IntoIterator for &'g ResourceGroups<'a> {
    type Item = &'g ResourceGroup<'a>;
    type IntoIter = std::slice::Iter<'g, ResourceGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
