//! Error types for permset

use thiserror::Error;

/// Result type alias for permset
pub type Result<T> = std::result::Result<T, PermsetError>;

/// Main error type for permset
///
/// The wildcard operations themselves never fail; these variants cover
/// loading catalogs and configuration, validating drafts, and the CLI.
#[derive(Error, Debug)]
pub enum PermsetError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),
}
