//! Loading catalogs from YAML and JSON

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use super::PermissionCatalog;
use crate::auth::types::Permission;
use crate::utils::error::{PermsetError, Result};

/// Accepted document shapes: a bare list or `{ permissions: [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Permission>),
    Wrapped { permissions: Vec<Permission> },
}

impl CatalogDocument {
    fn into_permissions(self) -> Vec<Permission> {
        match self {
            CatalogDocument::List(permissions) => permissions,
            CatalogDocument::Wrapped { permissions } => permissions,
        }
    }
}

impl PermissionCatalog {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: CatalogDocument = serde_yaml::from_str(content)?;
        Ok(Self::new(document.into_permissions()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        Ok(Self::new(document.into_permissions()))
    }

    /// Load a catalog file; `.json` files are parsed as JSON, anything else as YAML
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading permission catalog from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PermsetError::not_found(format!("Catalog file {:?}", path))
            } else {
                PermsetError::Io(e)
            }
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        debug!("Loaded {} permissions", catalog.len());
        Ok(catalog)
    }
}
