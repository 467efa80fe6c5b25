//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which amalgamates the
//! source tree in memory and compares the result with the output header on
//! disk. It exits with an error when the header is missing or out of date,
//! which makes it suitable for CI.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::{Context, Result};
use clap::Args;

use amalgamate::error::Error;
use amalgamate::output::OutputConfig;
use amalgamate::{orchestrator, suggestions};

use crate::cli::SourceArgs;

/// Verify the output header is up to date with the source tree
#[derive(Args, Debug, Default)]
pub struct CheckArgs {}

/// Execute the `check` command.
pub fn execute(_args: CheckArgs, source: &SourceArgs, output: &OutputConfig) -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = source.resolve(&working_dir)?;

    match orchestrator::check(&config) {
        Ok(amalgamation) => {
            println!(
                "{} {} {}",
                output.ok("up to date"),
                config.output.display(),
                output.dim(&format!("({} files)", amalgamation.files.len()))
            );
            Ok(())
        }
        Err(e @ Error::Stale { .. }) => {
            println!("{} {}", output.fail("stale"), config.output.display());
            Err(suggestions::explain(e, &config))
        }
        Err(e) => Err(suggestions::explain(e, &config)),
    }
}
