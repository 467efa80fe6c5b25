//! Path manipulation utilities for amalgamate

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component.
///
/// The filesystem is never consulted, so symlinks are not resolved. A `..`
/// that would climb above the start of a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Render a path with forward slashes, the form include directives use.
///
/// A path starting at the root keeps a single leading `/`.
pub fn to_slash(path: &Path) -> String {
    let joined = path
        .components()
        .filter(|c| !matches!(c, Component::RootDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if matches!(path.components().next(), Some(Component::RootDir)) {
        format!("/{}", joined)
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_cur_dir() {
        assert_eq!(
            normalize(Path::new("./duckdb/./stable/vector.hpp")),
            PathBuf::from("duckdb/stable/vector.hpp")
        );
    }

    #[test]
    fn test_normalize_folds_parent_dir() {
        assert_eq!(
            normalize(Path::new("duckdb/stable/../stable/common.hpp")),
            PathBuf::from("duckdb/stable/common.hpp")
        );
    }

    #[test]
    fn test_normalize_keeps_leading_parent_dir() {
        assert_eq!(
            normalize(Path::new("../shared/a.h")),
            PathBuf::from("../shared/a.h")
        );
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_normalize_root_does_not_climb() {
        assert_eq!(normalize(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn test_to_slash() {
        let path: PathBuf = ["duckdb", "stable", "vector.hpp"].iter().collect();
        assert_eq!(to_slash(&path), "duckdb/stable/vector.hpp");
    }

    #[test]
    fn test_to_slash_absolute() {
        assert_eq!(to_slash(Path::new("/abs/x.h")), "/abs/x.h");
        assert_eq!(to_slash(Path::new("/")), "/");
    }

    #[test]
    fn test_to_slash_absolute_matches_anchored_glob() {
        let pattern = glob::Pattern::new("/abs/**/*.md").unwrap();
        assert!(pattern.matches(&to_slash(Path::new("/abs/lib/NOTES.md"))));
    }
}
