//! CLI dispatch integration tests
//!
//! Every subcommand is driven through `cli::run` against a catalog file.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::CatalogFactory;
    use clap::{CommandFactory, Parser};
    use permset::PermsetError;
    use permset::cli::{self, Cli};
    use permset::config::Config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file() -> NamedTempFile {
        let json = serde_json::to_string(&CatalogFactory::platform_permissions()).unwrap();
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    async fn run_with_catalog(file: &NamedTempFile, args: &[&str]) -> permset::Result<()> {
        let path = file.path().to_str().unwrap();
        let mut argv = vec!["permset", "--catalog", path];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        cli::run(cli, Config::default()).await
    }

    async fn run_without_catalog(args: &[&str]) -> permset::Result<()> {
        let mut argv = vec!["permset"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        cli::run(cli, Config::default()).await
    }

    #[tokio::test]
    async fn test_every_subcommand_succeeds_with_catalog() {
        let file = catalog_file();
        let cases: &[&[&str]] = &[
            &["compress", "items.create,items.read", "items.update", "items.delete"],
            &["expand", "roles.*", "*.items"],
            &["classify", "a.b.*"],
            &["validate", "items.*", "users.invite"],
            &["audit", "*.*", "roles.delete"],
            &["suggest", "tax_templates.read", "tax_templates.update"],
            &["matrix", "users.read"],
            &["--json", "matrix", "users.*"],
        ];

        for args in cases {
            let result = run_with_catalog(&file, args).await;
            assert!(result.is_ok(), "{:?} failed: {:?}", args, result);
        }
    }

    #[tokio::test]
    async fn test_validate_fails_on_malformed_and_unknown_codes() {
        let file = catalog_file();

        let result = run_with_catalog(&file, &["validate", "*.items"]).await;
        assert!(matches!(result, Err(PermsetError::Validation(_))));

        let result = run_with_catalog(&file, &["validate", "legacy.export"]).await;
        assert!(matches!(result, Err(PermsetError::Validation(_))));
    }

    #[tokio::test]
    async fn test_catalog_free_subcommands() {
        assert!(run_without_catalog(&["classify", "*.*"]).await.is_ok());
        assert!(run_without_catalog(&["validate", "items.*"]).await.is_ok());

        let result = run_without_catalog(&["validate", "a.b.*"]).await;
        assert!(matches!(result, Err(PermsetError::Validation(_))));
    }

    #[tokio::test]
    async fn test_catalog_required() {
        for command in ["compress", "expand", "audit", "suggest", "matrix"] {
            let result = run_without_catalog(&[command, "items.read"]).await;
            let err = result.unwrap_err();
            assert!(err.is_user_error());
            assert!(err.to_string().contains(command), "{}", err);
        }
    }

    #[tokio::test]
    async fn test_missing_catalog_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let cli = Cli::try_parse_from([
            "permset",
            "--catalog",
            path.to_str().unwrap(),
            "compress",
            "items.read",
        ])
        .unwrap();

        let result = cli::run(cli, Config::default()).await;
        assert!(matches!(result, Err(PermsetError::NotFound(_))));
    }

    #[test]
    fn test_long_version_reports_build() {
        let rendered = Cli::command().render_long_version();
        assert!(rendered.contains(permset::LONG_VERSION), "{}", rendered);
    }
}
