//! Text and JSON rendering for CLI results

use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

use crate::auth::{
    DangerousPermission, MatrixRow, PermissionCatalog, SelectionState, WildcardSuggestion,
    WildcardType, wildcard,
};
use crate::utils::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyReport {
    pub code: String,
    pub wildcard_type: WildcardType,
    pub is_wildcard: bool,
    pub is_valid: bool,
}

impl ClassifyReport {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            wildcard_type: wildcard::classify(code),
            is_wildcard: wildcard::is_wildcard(code),
            is_valid: wildcard::is_valid_wildcard(code),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpandReport {
    /// Known codes in catalog order
    pub codes: Vec<String>,
    /// Codes the catalog does not know, sorted; includes wildcards
    /// that resolved to nothing, such as `*.items`
    pub unknown: Vec<String>,
    /// Valid wildcards from the input that matched no catalog code
    pub unmatched: Vec<String>,
}

impl ExpandReport {
    pub fn new(input: &[String], expanded: &HashSet<String>, catalog: &PermissionCatalog) -> Self {
        let codes = catalog
            .codes()
            .filter(|c| expanded.contains(*c))
            .map(str::to_string)
            .collect();
        let mut unknown: Vec<String> = expanded
            .iter()
            .filter(|c| !catalog.contains(c))
            .cloned()
            .collect();
        unknown.sort();
        let unmatched = input
            .iter()
            .filter(|c| wildcard::is_wildcard(c) && wildcard::is_valid_wildcard(c))
            .filter(|c| catalog.expand([c.as_str()]).is_empty())
            .cloned()
            .collect();
        Self {
            codes,
            unknown,
            unmatched,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateReport {
    pub invalid_patterns: Vec<String>,
    pub unknown_codes: Vec<String>,
}

impl ValidateReport {
    pub fn new(codes: &[String], catalog: Option<&PermissionCatalog>) -> Self {
        let invalid_patterns = codes
            .iter()
            .filter(|c| !wildcard::is_valid_wildcard(c))
            .cloned()
            .collect();
        let unknown_codes = catalog
            .map(|catalog| catalog.unknown_codes(codes))
            .unwrap_or_default();
        Self {
            invalid_patterns,
            unknown_codes,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.invalid_patterns.is_empty() && self.unknown_codes.is_empty()
    }
}

pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn emit<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if self.json {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        } else {
            text(&mut out)?;
        }
        Ok(())
    }

    pub fn codes(&self, codes: &[String]) -> Result<()> {
        self.emit(&codes, |out| {
            for code in codes {
                writeln!(out, "{}", code)?;
            }
            Ok(())
        })
    }

    pub fn classify(&self, report: &ClassifyReport) -> Result<()> {
        self.emit(report, |out| {
            writeln!(
                out,
                "{}: {} (valid: {})",
                report.code, report.wildcard_type, report.is_valid
            )
        })
    }

    pub fn expand(&self, report: &ExpandReport) -> Result<()> {
        self.emit(report, |out| {
            for code in &report.codes {
                writeln!(out, "{}", code)?;
            }
            for code in &report.unknown {
                if wildcard::is_wildcard(code) {
                    writeln!(out, "{} (unresolved wildcard)", code)?;
                } else {
                    writeln!(out, "{} (unknown)", code)?;
                }
            }
            for code in &report.unmatched {
                writeln!(out, "{} (matches nothing)", code)?;
            }
            Ok(())
        })
    }

    pub fn validate(&self, report: &ValidateReport) -> Result<()> {
        self.emit(report, |out| {
            if report.is_ok() {
                return writeln!(out, "ok");
            }
            for code in &report.invalid_patterns {
                writeln!(out, "invalid wildcard: {}", code)?;
            }
            for code in &report.unknown_codes {
                writeln!(out, "unknown code: {}", code)?;
            }
            Ok(())
        })
    }

    pub fn findings(&self, findings: &[DangerousPermission]) -> Result<()> {
        self.emit(&findings, |out| {
            if findings.is_empty() {
                return writeln!(out, "no dangerous permissions");
            }
            for finding in findings {
                writeln!(
                    out,
                    "[{}] {}: {}",
                    finding.level, finding.code, finding.message
                )?;
            }
            Ok(())
        })
    }

    pub fn suggestions(&self, suggestions: &[WildcardSuggestion]) -> Result<()> {
        self.emit(&suggestions, |out| {
            for suggestion in suggestions {
                writeln!(
                    out,
                    "{} replaces {}",
                    suggestion.wildcard,
                    suggestion.replaces.join(", ")
                )?;
            }
            Ok(())
        })
    }

    pub fn matrix(&self, rows: &[MatrixRow]) -> Result<()> {
        self.emit(&rows, |out| {
            for row in rows {
                let marker = match row.state {
                    SelectionState::All => "[x]",
                    SelectionState::Partial => "[-]",
                    SelectionState::None => "[ ]",
                };
                let actions: Vec<String> = row
                    .cells
                    .iter()
                    .map(|cell| {
                        if cell.checked {
                            format!("+{}", cell.action)
                        } else {
                            cell.action.clone()
                        }
                    })
                    .collect();
                writeln!(
                    out,
                    "{} {}/{}: {}",
                    marker,
                    row.module,
                    row.resource,
                    actions.join(" ")
                )?;
            }
            Ok(())
        })
    }
}
