//! # Error Handling
//!
//! This module defines the centralized error type for `amalgamate`. It uses
//! the `thiserror` library to build an `Error` enum covering every way a run
//! can fail, with messages that name the offending path.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum representing all failures. Amalgamation is an
//!   all-or-nothing batch transform, so none of these are recovered from
//!   inside the library; they propagate to the caller and abort the run.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The failure modes covered are:
//!
//! - Configuration parsing and validation errors.
//! - Missing include targets.
//! - Unreadable source files.
//! - Source files that are not valid UTF-8.
//! - Directory traversal failures.
//! - Output write failures.
//! - Stale output detected by `check`.
//! - Wrapped I/O, YAML, regex and glob errors.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for amalgamation runs
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing or validating the configuration.
    ///
    /// This error includes the specific issue and optionally a hint about how
    /// to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An in-scope include names a file that does not exist.
    #[error("Missing include '{}' (included from {})", path.display(), included_from.display())]
    MissingInclude {
        path: PathBuf,
        included_from: PathBuf,
    },

    /// A source file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A source file is not valid UTF-8 text.
    #[error("File '{}' is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    /// The source directory could not be traversed.
    #[error("Failed to walk '{}': {message}", path.display())]
    Walk { path: PathBuf, message: String },

    /// The amalgamated output could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output on disk differs from a fresh amalgamation.
    #[error("Amalgamated output '{}' is out of date", output.display())]
    Stale { output: PathBuf },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

impl Error {
    /// The path this error is about, when there is one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Error::MissingInclude { path, .. }
            | Error::Read { path, .. }
            | Error::Encoding { path }
            | Error::Walk { path, .. }
            | Error::Write { path, .. } => Some(path),
            Error::Stale { output } => Some(output),
            _ => None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
