//! # Amalgamate CLI
//!
//! This is the binary entry point for the `amalgamate` command-line tool.
//!
//! Its responsibilities are parsing arguments with `clap`, setting up
//! logging, and dispatching to a command. All amalgamation logic lives in the
//! library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
