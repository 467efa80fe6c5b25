//! # Build Command Implementation
//!
//! This module implements the `build` subcommand, which is also what runs
//! when `amalgamate` is invoked without a subcommand.
//!
//! ## Functionality
//!
//! - **Amalgamation**: Walks the source directory and inlines every in-scope
//!   include, emitting each header once.
//! - **Atomic Output**: The header is only written after the whole tree has
//!   resolved. A failure leaves any previous output untouched.
//! - **Dry Run**: `--dry-run` prints the amalgamated header to stdout instead
//!   of writing it.

use anyhow::{Context, Result};
use clap::Args;

use amalgamate::output::OutputConfig;
use amalgamate::{orchestrator, suggestions, write};

use crate::cli::SourceArgs;

/// Amalgamate the source tree and write the output header
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Print the amalgamated header to stdout instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `build` command.
pub fn execute(args: BuildArgs, source: &SourceArgs, output: &OutputConfig) -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = source.resolve(&working_dir)?;

    let amalgamation =
        orchestrator::assemble(&config).map_err(|e| suggestions::explain(e, &config))?;

    if args.dry_run {
        print!("{}", amalgamation.text);
        return Ok(());
    }

    write::execute(&amalgamation, &config.output).map_err(|e| suggestions::explain(e, &config))?;

    if !args.quiet {
        println!(
            "{} {} {}",
            output.ok("wrote"),
            config.output.display(),
            output.dim(&format!("({} files)", amalgamation.files.len()))
        );
    }
    Ok(())
}
