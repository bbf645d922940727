//! Build script for permset
//!
//! Stamps the git revision and compiler version into the binary so
//! `permset --version` can report them.

use std::process::Command;

fn main() {
    let docs_rs = std::env::var("DOCS_RS").is_ok();

    let git_hash = if docs_rs {
        None
    } else {
        command_output("git", &["rev-parse", "--short", "HEAD"])
    };
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rust_version = if docs_rs {
        None
    } else {
        command_output(&rustc, &["--version"])
    };

    println!(
        "cargo:rustc-env=PERMSET_GIT_HASH={}",
        git_hash.as_deref().unwrap_or("unknown")
    );
    println!(
        "cargo:rustc-env=PERMSET_RUST_VERSION={}",
        rust_version.as_deref().unwrap_or("unknown")
    );

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=DOCS_RS");
}

/// First line of a successful command's stdout
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    stdout
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}
