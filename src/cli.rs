//! CLI argument parsing and command dispatch

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use amalgamate::config::{self, Config};
use amalgamate::output::OutputConfig;
use amalgamate::suggestions;

use crate::commands;

/// Amalgamate - Merge a header tree into a single self-contained header
#[derive(Parser, Debug)]
#[command(name = "amalgamate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `build`)
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    source: SourceArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace), overriding RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// Options selecting what to amalgamate, shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to a configuration file (defaults to .amalgamate.yaml when present)
    #[arg(short, long, global = true, value_name = "FILE", env = "AMALGAMATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory to walk for headers, relative to the include root
    #[arg(long, global = true, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory quoted include paths are resolved against
    #[arg(long, global = true, value_name = "DIR")]
    pub include_root: Option<PathBuf>,

    /// Only includes whose path starts with this prefix are inlined
    #[arg(long, global = true, value_name = "PREFIX")]
    pub scope_prefix: Option<String>,

    /// Where to write the amalgamated header
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the configuration and apply command-line overrides on top
    pub fn resolve(&self, working_dir: &Path) -> Result<Config> {
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(suggestions::config_not_found(path));
            }
        }

        let mut config = config::load(self.config.as_deref(), working_dir)?;
        if let Some(source_dir) = &self.source_dir {
            config.source_dir = source_dir.clone();
        }
        if let Some(include_root) = &self.include_root {
            config.include_root = include_root.clone();
        }
        if let Some(scope_prefix) = &self.scope_prefix {
            config.scope_prefix = scope_prefix.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Amalgamate the source tree and write the output header
    Build(commands::build::BuildArgs),

    /// Verify the output header is up to date with the source tree
    Check(commands::check::CheckArgs),

    /// Display the include graph of the source tree
    Tree(commands::tree::TreeArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level.as_deref())?;
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            None => {
                commands::build::execute(commands::build::BuildArgs::default(), &self.source, &output)
            }
            Some(Commands::Build(args)) => commands::build::execute(args, &self.source, &output),
            Some(Commands::Check(args)) => commands::check::execute(args, &self.source, &output),
            Some(Commands::Tree(args)) => commands::tree::execute(args, &self.source, &output),
            Some(Commands::Completions(args)) => commands::completions::execute(args),
        }
    }
}

/// Initialize `env_logger` from `RUST_LOG`, letting `--log-level` override it
fn init_logging(level: Option<&str>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(parse_level(level)?);
    }
    builder
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);
    // Tests may initialize more than once
    let _ = builder.try_init();
    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    level.parse().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level '{}'\n\nhint: Use one of error, warn, info, debug, trace",
            level
        )
    })
}
