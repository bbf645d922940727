//! Test fixtures and data factories
//!
//! All factories build real catalogs, not mocks.

use permset::{Permission, PermissionCatalog};

/// Factory for permission catalogs
pub struct CatalogFactory;

impl CatalogFactory {
    /// The three-entry catalog used throughout the compressor documentation
    pub fn minimal() -> PermissionCatalog {
        PermissionCatalog::new(vec![
            Permission::new("items", "create", "inventory"),
            Permission::new("items", "delete", "inventory"),
            Permission::new("roles", "create", "platform"),
        ])
    }

    /// Inventory and platform modules with one single-action resource
    pub fn platform() -> PermissionCatalog {
        PermissionCatalog::new(Self::platform_permissions())
    }

    pub fn platform_permissions() -> Vec<Permission> {
        let entries: &[(&str, &[&str], &str)] = &[
            ("items", &["create", "read", "update", "delete"], "inventory"),
            ("item_groups", &["create", "read", "update"], "inventory"),
            ("tax_templates", &["read", "update"], "accounting"),
            ("charge_templates", &["read"], "accounting"),
            ("roles", &["create", "read", "update", "delete"], "platform"),
            ("users", &["invite", "read", "update"], "platform"),
        ];

        entries
            .iter()
            .flat_map(|(resource, actions, module)| {
                actions
                    .iter()
                    .map(move |action| Permission::new(resource, action, module))
            })
            .collect()
    }

    /// `resources` resources with `actions` actions each
    pub fn generated(resources: usize, actions: usize) -> PermissionCatalog {
        let permissions = (0..resources)
            .flat_map(|r| {
                (0..actions).map(move |a| {
                    Permission::new(&format!("res_{}", r), &format!("act_{}", a), "generated")
                })
            })
            .collect();
        PermissionCatalog::new(permissions)
    }
}

/// Owned strings from string literals
pub fn codes(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_catalog_is_consistent() {
        let catalog = CatalogFactory::platform();
        assert_eq!(catalog.len(), 17);
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.resource_groups().len(), 6);
    }

    #[test]
    fn test_generated_catalog_size() {
        let catalog = CatalogFactory::generated(4, 3);
        assert_eq!(catalog.len(), 12);
        assert!(catalog.contains("res_3.act_2"));
    }
}
