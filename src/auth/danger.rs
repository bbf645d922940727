//! Dangerous permission assessment
//!
//! Drives the warning shown when a role grants broad or destructive access.
//! The assessment is advisory; enforcement happens server side.

use serde::Serialize;
use std::collections::HashSet;

use super::catalog::PermissionCatalog;
use super::types::{action_of, resource_of};
use super::wildcard::{self, WildcardType};
use crate::config::DangerConfig;

/// Severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    Critical,
    High,
    Medium,
}

impl std::fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DangerLevel::Critical => "critical",
            DangerLevel::High => "high",
            DangerLevel::Medium => "medium",
        };
        f.write_str(label)
    }
}

/// Why a code was flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerReason {
    FullAccess,
    ResourceWildcard,
    MalformedWildcard,
    DestructiveAction,
    SensitiveResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DangerousPermission {
    pub code: String,
    pub level: DangerLevel,
    pub reason: DangerReason,
    /// Concrete permissions the code grants
    pub grants: usize,
    pub message: String,
}

/// Flag broad or destructive codes in a selection
///
/// Wildcards are assessed before concrete codes and the result is sorted
/// by severity; equal severities keep selection order.
pub fn assess<I>(codes: I, catalog: &PermissionCatalog, config: &DangerConfig) -> Vec<DangerousPermission>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let codes: Vec<String> = codes
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .filter(|c| seen.insert(c.clone()))
        .collect();

    let (wildcards, concrete): (Vec<&String>, Vec<&String>) =
        codes.iter().partition(|c| wildcard::is_wildcard(c));

    let mut findings: Vec<DangerousPermission> = wildcards
        .into_iter()
        .map(|code| assess_wildcard(code, catalog))
        .chain(
            concrete
                .into_iter()
                .filter_map(|code| assess_concrete(code, config)),
        )
        .collect();

    findings.sort_by_key(|f| f.level);
    findings
}

pub fn has_critical(findings: &[DangerousPermission]) -> bool {
    findings.iter().any(|f| f.level == DangerLevel::Critical)
}

fn assess_wildcard(code: &str, catalog: &PermissionCatalog) -> DangerousPermission {
    if !wildcard::is_valid_wildcard(code) {
        return DangerousPermission {
            code: code.to_string(),
            level: DangerLevel::Medium,
            reason: DangerReason::MalformedWildcard,
            grants: 0,
            message: format!("'{}' is not a valid wildcard pattern", code),
        };
    }

    let grants = catalog.expand([code]).len();
    match wildcard::classify(code) {
        WildcardType::Full => DangerousPermission {
            code: code.to_string(),
            level: DangerLevel::Critical,
            reason: DangerReason::FullAccess,
            grants,
            message: format!("Grants full access to all {} permissions", grants),
        },
        // Valid wildcards are either full or resource wildcards
        _ => {
            let resource = resource_of(code).unwrap_or_default();
            DangerousPermission {
                code: code.to_string(),
                level: DangerLevel::High,
                reason: DangerReason::ResourceWildcard,
                grants,
                message: format!(
                    "Grants every action on '{}' ({} permissions, including any added later)",
                    resource, grants
                ),
            }
        }
    }
}

fn assess_concrete(code: &str, config: &DangerConfig) -> Option<DangerousPermission> {
    let resource = resource_of(code)?;
    let action = action_of(code)?;

    if config.is_dangerous_action(action) {
        return Some(DangerousPermission {
            code: code.to_string(),
            level: DangerLevel::Medium,
            reason: DangerReason::DestructiveAction,
            grants: 1,
            message: format!("'{}' is a destructive action on '{}'", action, resource),
        });
    }
    if config.is_sensitive_resource(resource) {
        return Some(DangerousPermission {
            code: code.to_string(),
            level: DangerLevel::Medium,
            reason: DangerReason::SensitiveResource,
            grants: 1,
            message: format!("'{}' controls access management", resource),
        });
    }
    None
}
