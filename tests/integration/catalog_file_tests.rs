//! Catalog file loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::CatalogFactory;
    use permset::{PermissionCatalog, PermsetError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_yaml_catalog_round_trips_through_compression() {
        let file = write_temp(
            ".yaml",
            r#"
permissions:
  - code: items.create
    resource: items
    action: create
    module: inventory
  - code: items.delete
    resource: items
    action: delete
    module: inventory
  - code: roles.create
    resource: roles
    action: create
    module: platform
"#,
        );

        let catalog = PermissionCatalog::from_file(file.path()).await.unwrap();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.compress(["items.delete", "items.create"]), vec!["items.*"]);
        assert_eq!(catalog.module_groups().len(), 2);
    }

    #[tokio::test]
    async fn test_json_catalog_from_serialized_permissions() {
        let permissions = CatalogFactory::platform_permissions();
        let json = serde_json::to_string(&permissions).unwrap();
        let file = write_temp(".JSON", &json);

        let catalog = PermissionCatalog::from_file(file.path()).await.unwrap();
        assert_eq!(catalog.len(), permissions.len());
        assert_eq!(catalog.get("users.invite").unwrap().module, "platform");
    }

    #[tokio::test]
    async fn test_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PermissionCatalog::from_file(dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(PermsetError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_inconsistent_catalog_fails_validation() {
        let file = write_temp(
            ".yml",
            r#"
- code: items.create
  resource: items
- code: items.create
  resource: items
"#,
        );

        let catalog = PermissionCatalog::from_file(file.path()).await.unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_inactive_entries_are_dropped_by_active_only() {
        let catalog = PermissionCatalog::from_yaml_str(
            r#"
- code: items.create
- code: items.delete
  is_active: false
"#,
        )
        .unwrap();

        let active = catalog.active_only();
        assert_eq!(active.len(), 1);
        // The only active code covers the whole filtered catalog
        assert_eq!(active.compress(["items.create"]), vec!["*.*"]);
        assert_eq!(catalog.compress(["items.create"]), vec!["items.create"]);
    }
}
