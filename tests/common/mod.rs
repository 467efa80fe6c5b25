//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_sample_tree();
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::headers;
    pub use super::TestFixture;
}

/// Header sources modelled on a small library split across files.
#[allow(dead_code)]
pub mod headers {
    pub const BANNER: &str = "//===----------------------------------------------------------------------===//\n\
//                         DuckDB\n\
//\n\
// duckdb/stable/{name}\n\
//\n\
//\n\
//===----------------------------------------------------------------------===//\n";

    pub const COMMON: &str = "#pragma once\n\
\n\
#include \"duckdb.h\"\n\
#include <vector>\n\
\n\
namespace duckdb_stable {\n\
struct Common {};\n\
}\n";

    pub const EXCEPTION: &str = "#pragma once\n\
\n\
#include \"duckdb/stable/common.hpp\"\n\
\n\
namespace duckdb_stable {\n\
struct Exception {};\n\
}\n";

    pub const VECTOR: &str = "#pragma once\n\
\n\
#include \"duckdb/stable/common.hpp\"\n\
#include \"duckdb/stable/exception.hpp\"\n\
\n\
namespace duckdb_stable {\n\
struct Vector {};\n\
}\n";

    /// Prefix a header body with its banner comment
    pub fn with_banner(name: &str, body: &str) -> String {
        format!("{}\n{}", BANNER.replace("{name}", name), body)
    }
}

/// A temporary working directory laid out like a header library checkout.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.amalgamate.yaml` configuration file with the given content.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".amalgamate.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a binary file with the given path and content.
    #[allow(dead_code)]
    pub fn with_binary_file(self, path: &str, content: &[u8]) -> Self {
        self.temp_dir
            .child(path)
            .write_binary(content)
            .expect("Failed to write binary file");
        self
    }

    /// Lay out `duckdb/stable/{common,exception,vector}.hpp` with banners.
    pub fn with_sample_tree(self) -> Self {
        self.with_file(
            "duckdb/stable/common.hpp",
            &headers::with_banner("common.hpp", headers::COMMON),
        )
        .with_file(
            "duckdb/stable/exception.hpp",
            &headers::with_banner("exception.hpp", headers::EXCEPTION),
        )
        .with_file(
            "duckdb/stable/vector.hpp",
            &headers::with_banner("vector.hpp", headers::VECTOR),
        )
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file below the fixture root.
    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("amalgamate");
        cmd.current_dir(self.path())
            .env_remove("AMALGAMATE_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
