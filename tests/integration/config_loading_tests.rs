//! Configuration loading integration tests
//!
//! Files on disk, environment overrides, and their effect on compression.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::CatalogFactory;
    use permset::config::{Config, PermsetConfig, Validate};
    use permset::PermsetError;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let file = config_file(
            r#"
compression:
  min_group_size: 4
  full_access_shortcut: false
"#,
        );

        let config = Config::load(Some(file.path())).await.unwrap();
        assert_eq!(config.compression().min_group_size, 4);
        assert!(!config.compression().full_access_shortcut);
    }

    #[tokio::test]
    async fn test_invalid_file_reports_section() {
        let file = config_file("logging:\n  level: loud\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(&err, PermsetError::Config(msg) if msg.starts_with("logging:")));
    }

    #[test]
    fn test_env_overrides_win_over_file_values() {
        let settings: PermsetConfig =
            serde_yaml::from_str("compression:\n  min_group_size: 5\n").unwrap();
        let env: HashMap<&str, &str> = [
            ("PERMSET_MIN_GROUP_SIZE", "3"),
            ("PERMSET_SENSITIVE_RESOURCES", "roles,users,api_keys"),
        ]
        .into_iter()
        .collect();

        let settings = settings
            .with_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.compression.min_group_size, 3);
        assert_eq!(
            settings.danger.sensitive_resources,
            vec!["roles", "users", "api_keys"]
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_env_override_can_produce_invalid_config() {
        let settings = PermsetConfig::default()
            .with_env_overrides(|key| {
                (key == "PERMSET_DANGEROUS_ACTIONS").then(|| "delete,items.purge".to_string())
            })
            .unwrap();
        let err = settings.validate().unwrap_err();
        assert!(err.contains("items.purge"));
    }

    #[test]
    fn test_disabled_shortcut_keeps_resource_wildcards() {
        let config = Config::from_yaml_str("compression:\n  full_access_shortcut: false\n").unwrap();
        let catalog = CatalogFactory::minimal();
        let all: Vec<&str> = catalog.codes().collect();

        assert_eq!(
            catalog.compress_with(&all, config.compression()),
            vec!["items.*", "roles.create"]
        );
    }
}
