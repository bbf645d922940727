//! permset - permission set compression CLI
//!
//! Compresses, expands and audits permission codes against a catalog file

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use permset::cli::{self, Cli};
use permset::PermsetError;
use permset::config::Config;
use permset::utils::init_logging;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Alternate form prints the context chain on one line
            eprintln!("Error: {:#}", e);
            let user_error = e
                .downcast_ref::<PermsetError>()
                .is_some_and(PermsetError::is_user_error);
            if user_error {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.global.config.as_deref())
        .await
        .context("failed to load configuration")?;

    init_logging(config.logging()).context("failed to initialize logging")?;
    debug!("permset {}", permset::build_info());

    cli::run(cli, config).await?;
    Ok(())
}
