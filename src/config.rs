//! # Configuration
//!
//! An amalgamation run is described by a [`Config`]. Every field has a
//! default (see [`crate::defaults`]), so the tool works with no configuration
//! at all. A `.amalgamate.yaml` file can override any of them:
//!
//! ```yaml
//! source_dir: mylib
//! include_root: include
//! scope_prefix: mylib/
//! output: dist/mylib.hpp
//! exclude:
//!   - "**/*.md"
//! ```
//!
//! `source_dir` is relative to `include_root`, the directory include paths are
//! resolved against. `output` is relative to the working directory. Only the
//! output's file name takes part in the traversal skip rule.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_CONFIG_FILENAME, DEFAULT_GUARD_MARKER, DEFAULT_INCLUDE_ROOT, DEFAULT_OUTPUT,
    DEFAULT_SCOPE_PREFIX, DEFAULT_SOURCE_DIR,
};
use crate::error::{Error, Result};

const VALID_KEYS_HINT: &str =
    "Valid keys are source_dir, include_root, scope_prefix, output, guard_marker, exclude";

/// Settings for one amalgamation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory walked for top-level files, relative to `include_root`
    pub source_dir: PathBuf,
    /// Directory that quoted include paths are resolved against
    pub include_root: PathBuf,
    /// Literal prefix an include path needs to be inlined
    pub scope_prefix: String,
    /// Destination of the amalgamated header
    pub output: PathBuf,
    /// Single-inclusion marker stripped from sources and emitted once on top
    pub guard_marker: String,
    /// Glob patterns (matched against paths relative to `include_root`)
    /// for files the traversal should not pick up as top-level entries
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            include_root: PathBuf::from(DEFAULT_INCLUDE_ROOT),
            scope_prefix: DEFAULT_SCOPE_PREFIX.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            guard_marker: DEFAULT_GUARD_MARKER.to_string(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.scope_prefix.is_empty() {
            return Err(Error::ConfigParse {
                message: "scope_prefix must not be empty".to_string(),
                hint: Some("An empty prefix would inline every quoted include".to_string()),
            });
        }
        if self.guard_marker.trim().is_empty() {
            return Err(Error::ConfigParse {
                message: "guard_marker must not be empty".to_string(),
                hint: None,
            });
        }
        self.output_file_name()?;
        self.exclude_patterns()?;
        Ok(())
    }

    /// File name of the output, skipped wherever it shows up in the source tree
    pub fn output_file_name(&self) -> Result<&OsStr> {
        self.output.file_name().ok_or_else(|| Error::ConfigParse {
            message: format!("output '{}' has no file name", self.output.display()),
            hint: Some("Point output at a file, e.g. dist/library.hpp".to_string()),
        })
    }

    /// Compile the `exclude` globs
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.exclude
            .iter()
            .map(|p| Pattern::new(p).map_err(Error::Glob))
            .collect()
    }
}

/// Parse a configuration from YAML. Blank or comment-only input yields the
/// defaults.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let has_content = yaml_content
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'));
    if !has_content {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = e.to_string();
        let hint = message
            .contains("unknown field")
            .then(|| VALID_KEYS_HINT.to_string());
        Error::ConfigParse { message, hint }
    })?;
    config.validate()?;
    Ok(config)
}

/// Parse a configuration file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Load the configuration for a run.
///
/// An explicitly named file must exist. Otherwise `.amalgamate.yaml` in
/// `working_dir` is used when present, and the defaults when not.
pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Config> {
    match explicit {
        Some(path) => from_file(path),
        None => {
            let candidate = working_dir.join(DEFAULT_CONFIG_FILENAME);
            if candidate.is_file() {
                log::debug!("Using configuration {}", candidate.display());
                from_file(candidate)
            } else {
                Ok(Config::default())
            }
        }
    }
}
