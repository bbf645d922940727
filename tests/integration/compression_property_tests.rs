//! Compression and expansion properties
//!
//! Round-trip, full-access collapse, single-member groups and the
//! classification table, checked against the public free functions.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_no_duplicates, assert_wildcards_first};
    use crate::common::fixtures::{CatalogFactory, codes};
    use permset::{
        FULL_ACCESS, PermissionCatalog, WildcardType, classify, compress, expand,
        get_wildcard_type, is_valid_wildcard, is_wildcard,
    };
    use std::collections::HashSet;

    fn subset(catalog: &PermissionCatalog, mask: u64) -> Vec<String> {
        catalog
            .codes()
            .enumerate()
            .filter(|(i, _)| mask & (1 << *i) != 0)
            .map(|(_, c)| c.to_string())
            .collect()
    }

    // ==================== Round-trip ====================

    #[test]
    fn test_round_trip_every_subset_of_minimal_catalog() {
        let catalog = CatalogFactory::minimal();
        for mask in 0..(1u64 << catalog.len()) {
            let selection = subset(&catalog, mask);
            let compressed = compress(&selection, catalog.permissions());
            let expanded = expand(&compressed, catalog.permissions());

            let expected: HashSet<String> = selection.into_iter().collect();
            assert_eq!(expanded, expected, "mask {:b}", mask);
        }
    }

    #[test]
    fn test_round_trip_sampled_subsets_of_platform_catalog() {
        let catalog = CatalogFactory::platform();
        let total = 1u64 << catalog.len();

        // Stride keeps the sample spread across every bit pattern width
        for mask in (0..total).step_by(97).chain([total - 1]) {
            let selection = subset(&catalog, mask);
            let compressed = catalog.compress(&selection);

            assert_wildcards_first(&compressed);
            assert_no_duplicates(&compressed);
            crate::assert_same_codes!(catalog.expand(&compressed), selection);
        }
    }

    // ==================== Full access ====================

    #[test]
    fn test_full_catalog_collapses_to_full_access() {
        let catalog = CatalogFactory::platform();
        let all: Vec<&str> = catalog.codes().collect();
        assert_eq!(compress(&all, catalog.permissions()), vec![FULL_ACCESS]);

        // Order of the selection does not matter
        let reversed: Vec<&str> = all.iter().rev().copied().collect();
        assert_eq!(catalog.compress(&reversed), vec![FULL_ACCESS]);
    }

    #[test]
    fn test_full_access_expands_to_whole_catalog() {
        let catalog = CatalogFactory::platform();
        let expanded = catalog.expand([FULL_ACCESS]);
        assert_eq!(expanded.len(), catalog.len());
    }

    #[test]
    fn test_catalog_sized_selection_with_stale_code_is_not_full_access() {
        let catalog = CatalogFactory::minimal();
        let selection = ["items.create", "items.delete", "legacy.export"];
        let compressed = catalog.compress(selection);
        assert_eq!(compressed, vec!["items.*", "legacy.export"]);
    }

    // ==================== Grouping ====================

    #[test]
    fn test_single_member_group_stays_concrete() {
        let catalog = CatalogFactory::platform();
        let compressed = catalog.compress(["charge_templates.read", "users.read"]);
        assert_eq!(compressed, vec!["charge_templates.read", "users.read"]);
    }

    #[test]
    fn test_minimal_catalog_examples() {
        let catalog = CatalogFactory::minimal();

        let expanded = expand(["items.*"], catalog.permissions());
        crate::assert_same_codes!(expanded, ["items.create", "items.delete"]);

        assert_eq!(
            compress(["items.create", "items.delete"], catalog.permissions()),
            vec!["items.*"]
        );
        assert_eq!(
            compress(["items.create"], catalog.permissions()),
            vec!["items.create"]
        );
    }

    #[test]
    fn test_wildcards_follow_catalog_order_and_leftovers_selection_order() {
        let catalog = CatalogFactory::platform();
        let selection = codes(&[
            "users.read",
            "roles.create",
            "roles.read",
            "roles.update",
            "roles.delete",
            "item_groups.read",
            "tax_templates.read",
            "tax_templates.update",
        ]);

        assert_eq!(
            catalog.compress(&selection),
            vec!["tax_templates.*", "roles.*", "users.read", "item_groups.read"]
        );
    }

    #[test]
    fn test_expand_is_identity_on_concrete_catalog_codes() {
        let catalog = CatalogFactory::platform();
        let selection = codes(&["items.read", "roles.delete", "charge_templates.read"]);
        let expanded = catalog.expand(&selection);
        crate::assert_same_codes!(expanded, selection);
    }

    #[test]
    fn test_expand_unknown_resource_wildcard_grants_nothing() {
        let catalog = CatalogFactory::platform();
        assert!(catalog.expand(["warehouses.*"]).is_empty());
    }

    // ==================== Classification ====================

    #[test]
    fn test_classification_table() {
        let cases = [
            ("*.*", WildcardType::Full, true, true),
            ("items.*", WildcardType::Module, true, true),
            ("items.create", WildcardType::None, false, true),
            ("*.items", WildcardType::None, true, false),
            ("a.b.*", WildcardType::Module, true, false),
        ];

        for (code, kind, wildcard, valid) in cases {
            assert_eq!(classify(code), kind, "{}", code);
            assert_eq!(get_wildcard_type(code), kind, "{}", code);
            assert_eq!(is_wildcard(code), wildcard, "{}", code);
            assert_eq!(is_valid_wildcard(code), valid, "{}", code);
        }
    }
}
