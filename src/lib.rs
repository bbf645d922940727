//! # permset
//!
//! Permission set compression and expansion for role editors.
//!
//! Roles store permission codes of the form `resource.action`. When every
//! action of a resource is granted the codes collapse into `resource.*`, and
//! a role holding the whole catalog collapses into `*.*`. Expanding a
//! compressed set against the same catalog gives back the original
//! selection.
//!
//! ## Quick Start
//!
//! ```rust
//! use permset::{Permission, PermissionCatalog};
//!
//! let catalog = PermissionCatalog::new(vec![
//!     Permission::new("items", "create", "inventory"),
//!     Permission::new("items", "update", "inventory"),
//!     Permission::new("roles", "create", "platform"),
//! ]);
//!
//! let compressed = catalog.compress(["items.create", "items.update"]);
//! assert_eq!(compressed, vec!["items.*"]);
//!
//! let expanded = catalog.expand(&compressed);
//! assert!(expanded.contains("items.update"));
//! ```
//!
//! ## Role editor
//!
//! ```rust
//! use permset::{Permission, PermissionCatalog, RoleEditor};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(PermissionCatalog::new(vec![
//!     Permission::new("items", "create", "inventory"),
//!     Permission::new("items", "delete", "inventory"),
//! ]));
//!
//! let mut editor = RoleEditor::new(catalog);
//! editor.set_name("Stock manager");
//! editor.toggle_resource("items");
//! assert_eq!(editor.compressed(), vec!["*.*"]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::{
    DangerLevel, DangerousPermission, FULL_ACCESS, Permission, PermissionCatalog,
    PermissionMatrix, RoleDraft, RoleEditor, RoleSubmission, SelectionState, WildcardSuggestion,
    WildcardType, classify, compress, compress_with, expand, get_wildcard_type, is_valid_wildcard,
    is_wildcard,
};
pub use config::Config;
pub use utils::error::{PermsetError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Version line shown by `permset --version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PERMSET_GIT_HASH"),
    ", ",
    env!("PERMSET_RUST_VERSION"),
    ")"
);

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("PERMSET_GIT_HASH"),
            rust_version: env!("PERMSET_RUST_VERSION"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.version, self.git_hash, self.rust_version)
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
