//! # Amalgamate
//!
//! This library merges a tree of interdependent header files into one
//! self-contained header. Every in-scope `#include "..."` is replaced by the
//! fully resolved content of its target, and every file contributes its body
//! exactly once, at the first point it is reached.
//!
//! ## Quick Example
//!
//! ```
//! use amalgamate::amalgamator::Amalgamator;
//! use amalgamate::config::Config;
//! use amalgamate::filesystem::MemoryTree;
//! use std::path::Path;
//!
//! let tree = MemoryTree::new()
//!     .with_file("root/A.h", "#include \"root/stable/B.h\"\nint a;")
//!     .with_file("root/stable/B.h", "int b;");
//!
//! let config = Config {
//!     scope_prefix: "root/stable".to_string(),
//!     ..Config::default()
//! };
//! let mut amalgamator = Amalgamator::from_config(&tree, &config).unwrap();
//! let result = amalgamator.amalgamate(Path::new("root")).unwrap();
//!
//! assert_eq!(result.text, "#pragma once\n\nint b;\nint a;");
//! ```
//!
//! ## Core Concepts
//!
//! - **Extraction (`extract`)**: Finds include directives and classifies them
//!   as in-scope (target starts with the scope prefix) or external.
//! - **Amalgamation (`amalgamator`)**: Depth-first resolution with a visited
//!   set that collapses diamond dependencies and breaks include cycles.
//! - **Normalization (`normalize`)**: Per-file cleanup of guard markers,
//!   banner comments and long blank-line runs.
//! - **Source Trees (`filesystem`)**: Disk and in-memory file access behind
//!   one trait.
//!
//! ## Execution Flow
//!
//! Given a [`config::Config`], `orchestrator::build`
//!
//! 1.  walks the source directory in file-name order,
//! 2.  resolves each file not already emitted,
//! 3.  prefixes a single guard marker,
//! 4.  writes the header only after everything resolved.

pub mod amalgamator;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extract;
pub mod filesystem;
pub mod graph;
pub mod normalize;
pub mod orchestrator;
pub mod output;
pub mod path;
pub mod suggestions;
pub mod write;

#[cfg(test)]
mod normalize_proptest;
