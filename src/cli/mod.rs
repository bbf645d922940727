//! Command line interface
//!
//! Thin wrapper over the library: load config and catalog, run one
//! operation, print text or JSON.

mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::{PermissionCatalog, PermissionMatrix, RoleEditor, danger, suggestion};
use crate::config::Config;
use crate::utils::error::{PermsetError, Result};
use output::{ClassifyReport, ExpandReport, Printer, ValidateReport};

/// Compress, expand and audit permission sets
#[derive(Parser, Debug)]
#[command(name = "permset")]
#[command(version, long_version = crate::LONG_VERSION, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Permission catalog (YAML, or JSON with a .json extension)
    #[arg(long, global = true, env = "PERMSET_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "PERMSET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Ignore inactive catalog entries
    #[arg(long, global = true)]
    pub active_only: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Collapse fully selected resources into wildcards
    Compress(CodesArgs),
    /// Resolve wildcards into concrete codes
    Expand(CodesArgs),
    /// Show the wildcard type of a code
    Classify {
        code: String,
    },
    /// Check wildcard syntax and, with a catalog, unknown codes
    Validate(CodesArgs),
    /// Report dangerous grants
    Audit(CodesArgs),
    /// Suggest wildcards for the selection
    Suggest(CodesArgs),
    /// Show per-resource selection state
    Matrix(CodesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CodesArgs {
    /// Permission codes, space or comma separated
    #[arg(value_delimiter = ',', num_args = 0..)]
    pub codes: Vec<String>,
}

impl CodesArgs {
    fn codes(&self) -> Vec<String> {
        self.codes
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    }
}

/// Execute a parsed command with the given configuration
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let printer = Printer::new(cli.global.json);
    let catalog = load_catalog(&cli.global).await?;

    match &cli.command {
        Command::Classify { code } => {
            printer.classify(&ClassifyReport::new(code))?;
        }
        Command::Compress(args) => {
            let catalog = require(catalog, "compress")?;
            // Stored wildcards are resolved first so they can recombine
            let mut editor = RoleEditor::with_config(Arc::new(catalog), config.settings.clone());
            editor.set_selection(args.codes());
            printer.codes(&editor.compressed())?;
        }
        Command::Expand(args) => {
            let catalog = require(catalog, "expand")?;
            let codes = args.codes();
            let expanded = catalog.expand(&codes);
            printer.expand(&ExpandReport::new(&codes, &expanded, &catalog))?;
        }
        Command::Validate(args) => {
            let report = ValidateReport::new(&args.codes(), catalog.as_ref());
            printer.validate(&report)?;
            if !report.is_ok() {
                return Err(PermsetError::validation("one or more codes are invalid"));
            }
        }
        Command::Audit(args) => {
            let catalog = require(catalog, "audit")?;
            let findings = danger::assess(args.codes(), &catalog, config.danger());
            if danger::has_critical(&findings) {
                warn!("Selection grants full access");
            }
            printer.findings(&findings)?;
        }
        Command::Suggest(args) => {
            let catalog = require(catalog, "suggest")?;
            let selection = catalog.expand(args.codes());
            let suggestions = suggestion::suggest_wildcards(
                &selection,
                &catalog,
                config.compression().min_group_size,
            );
            printer.suggestions(&suggestions)?;
        }
        Command::Matrix(args) => {
            let catalog = require(catalog, "matrix")?;
            let selection = catalog.expand(args.codes());
            printer.matrix(&PermissionMatrix::new(&catalog).rows(&selection))?;
        }
    }

    Ok(())
}

async fn load_catalog(global: &GlobalArgs) -> Result<Option<PermissionCatalog>> {
    let Some(path) = &global.catalog else {
        return Ok(None);
    };

    let catalog = PermissionCatalog::from_file(path).await?;
    catalog.validate()?;
    debug!("Catalog has {} resources", catalog.resource_groups().len());

    Ok(Some(if global.active_only {
        catalog.active_only()
    } else {
        catalog
    }))
}

fn require(catalog: Option<PermissionCatalog>, command: &str) -> Result<PermissionCatalog> {
    catalog.ok_or_else(|| {
        PermsetError::config(format!("--catalog is required for '{}'", command))
    })
}
