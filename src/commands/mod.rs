//! # CLI Command Implementations
//!
//! Each subcommand of `amalgamate` lives in its own file with:
//! - An `Args` struct defining command-specific options, derived with `clap`.
//! - An `execute` function that resolves the shared source options into a
//!   configuration and calls into the `amalgamate` library.

pub mod build;
pub mod check;
pub mod completions;
pub mod tree;
