//! Include graph materialization
//!
//! Builds the same depth-first, first-visit-wins traversal the amalgamator
//! performs, but records it as a tree of [`IncludeNode`]s instead of text.
//! A file reached again is recorded as a `repeated` leaf, which is exactly
//! where the amalgamator would substitute an empty body.

use std::path::{Path, PathBuf};

use crate::amalgamator::{missing_include, VisitedSet};
use crate::error::Result;
use crate::extract::IncludeExtractor;
use crate::filesystem::SourceTree;
use crate::path::normalize;

/// One include directive of a file, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeEntry {
    /// An in-scope include, resolved to its own subtree
    Header(IncludeNode),
    /// An out-of-scope include target, left for the consumer to supply
    External(String),
}

/// One file in the include graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeNode {
    pub path: PathBuf,
    /// Every include directive, in-scope or not, in source order
    pub includes: Vec<IncludeEntry>,
    /// Already emitted earlier in the traversal
    pub repeated: bool,
}

impl IncludeNode {
    fn leaf(path: PathBuf) -> Self {
        Self {
            path,
            includes: Vec::new(),
            repeated: true,
        }
    }
}

/// Build the include tree rooted at `path`, sharing `visited` with earlier
/// calls so later roots see earlier files as repeated.
pub fn include_tree<S: SourceTree + ?Sized>(
    source: &S,
    extractor: &IncludeExtractor,
    path: &Path,
    visited: &mut VisitedSet,
) -> Result<IncludeNode> {
    let key = normalize(path);
    if !visited.mark(&key) {
        return Ok(IncludeNode::leaf(key));
    }

    let text = source.read_to_string(&key)?;
    let mut node = IncludeNode {
        path: key,
        includes: Vec::new(),
        repeated: false,
    };

    for directive in extractor.extract_all(&text) {
        if !directive.in_scope {
            node.includes.push(IncludeEntry::External(directive.target));
            continue;
        }
        let child = include_tree(source, extractor, directive.target_path(), visited)
            .map_err(|e| missing_include(e, Some(&node.path)))?;
        node.includes.push(IncludeEntry::Header(child));
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filesystem::MemoryTree;

    fn header(entry: &IncludeEntry) -> &IncludeNode {
        match entry {
            IncludeEntry::Header(node) => node,
            IncludeEntry::External(target) => panic!("expected header, got {}", target),
        }
    }

    #[test]
    fn test_include_tree_marks_repeats() {
        let tree = MemoryTree::new()
            .with_file(
                "lib/a.h",
                "#include \"lib/b.h\"\n#include \"lib/c.h\"\n#include <vector>\n#include \"duckdb.h\"\n",
            )
            .with_file("lib/b.h", "#include \"lib/c.h\"\n")
            .with_file("lib/c.h", "#include \"lib/a.h\"\n");
        let extractor = IncludeExtractor::new("lib/").unwrap();
        let mut visited = VisitedSet::new();

        let root = include_tree(&tree, &extractor, Path::new("lib/a.h"), &mut visited).unwrap();

        assert!(!root.repeated);
        let (children, external): (Vec<_>, Vec<_>) = root
            .includes
            .iter()
            .partition(|entry| matches!(entry, IncludeEntry::Header(_)));
        assert_eq!(external, vec![&IncludeEntry::External("duckdb.h".to_string())]);
        assert_eq!(children.len(), 2);

        let b = header(children[0]);
        assert_eq!(b.path, PathBuf::from("lib/b.h"));
        let c = header(&b.includes[0]);
        assert_eq!(c.path, PathBuf::from("lib/c.h"));
        assert!(!c.repeated);
        // c -> a closes the cycle
        assert!(header(&c.includes[0]).repeated);
        // a's second include of c was already emitted under b
        assert!(header(children[1]).repeated);
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn test_include_tree_keeps_source_order() {
        let tree = MemoryTree::new()
            .with_file(
                "lib/a.h",
                "#include \"ext/first.h\"\n#include \"lib/b.h\"\n#include \"ext/last.h\"\n",
            )
            .with_file("lib/b.h", "");
        let extractor = IncludeExtractor::new("lib/").unwrap();

        let root = include_tree(&tree, &extractor, Path::new("lib/a.h"), &mut VisitedSet::new())
            .unwrap();

        assert!(matches!(&root.includes[0], IncludeEntry::External(t) if t == "ext/first.h"));
        assert!(
            matches!(&root.includes[1], IncludeEntry::Header(node) if node.path == Path::new("lib/b.h"))
        );
        assert!(matches!(&root.includes[2], IncludeEntry::External(t) if t == "ext/last.h"));
    }

    #[test]
    fn test_include_tree_missing_target() {
        let tree = MemoryTree::new().with_file("lib/a.h", "#include \"lib/zz.h\"\n");
        let extractor = IncludeExtractor::new("lib/").unwrap();
        let err = include_tree(&tree, &extractor, Path::new("lib/a.h"), &mut VisitedSet::new())
            .unwrap_err();
        assert!(matches!(err, Error::MissingInclude { .. }));
    }
}
