//! Default values for amalgamate configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication. Running the binary with no
//! arguments and no config file uses exactly these.

/// Name of the optional configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = ".amalgamate.yaml";

/// Directory walked for top-level headers.
pub const DEFAULT_SOURCE_DIR: &str = "duckdb";

/// Directory include paths are resolved against.
pub const DEFAULT_INCLUDE_ROOT: &str = ".";

/// Only includes whose literal path starts with this are inlined.
pub const DEFAULT_SCOPE_PREFIX: &str = "duckdb/stable";

/// Where the amalgamated header is written.
pub const DEFAULT_OUTPUT: &str = "duckdb/duckdb_stable.hpp";

/// Single-inclusion marker stripped from every file and emitted once on top.
pub const DEFAULT_GUARD_MARKER: &str = "#pragma once";
