//! # Recursive Amalgamation
//!
//! The [`Amalgamator`] turns a file into its self-contained body: every
//! in-scope include directive is replaced, in place, with the fully resolved
//! body of its target.
//!
//! ## Process
//!
//! 1.  **Visited Check**: A file already in the [`VisitedSet`] contributes
//!     nothing. This collapses diamond dependencies to their first point of
//!     use and ends include cycles.
//!
//! 2.  **Mark Before Recursing**: The file is marked before its dependencies
//!     are resolved, so an include cycle leading back to it sees it as
//!     visited.
//!
//! 3.  **Depth-First Substitution**: Directives are resolved in source order.
//!     The i-th directive's span is replaced with the i-th result, so repeated
//!     identical directives never trade results.
//!
//! 4.  **Cleanup**: The substituted text goes through the [`Normalizer`]
//!     before it is handed back, once per file.
//!
//! The visited set belongs to one `Amalgamator`. Create a fresh one per run.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, trace, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::IncludeExtractor;
use crate::filesystem::SourceTree;
use crate::normalize::Normalizer;
use crate::path::{normalize, to_slash};

/// Paths already emitted during a run, in first-visit order
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    seen: HashSet<PathBuf>,
    order: Vec<PathBuf>,
}

impl VisitedSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as visited. Returns `false` if it already was.
    pub fn mark(&mut self, path: &Path) -> bool {
        if self.seen.contains(path) {
            return false;
        }
        self.seen.insert(path.to_path_buf());
        self.order.push(path.to_path_buf());
        true
    }

    /// Whether `path` has been visited
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    /// Number of visited paths
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been visited yet
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited paths in the order they were first reached
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.order.iter()
    }
}

/// Result of amalgamating a whole directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amalgamation {
    /// Guard marker, blank line, then every resolved body
    pub text: String,
    /// Every file emitted, in emission order
    pub files: Vec<PathBuf>,
}

/// Resolves files against a [`SourceTree`], emitting each at most once
pub struct Amalgamator<'a, S: SourceTree + ?Sized> {
    source: &'a S,
    extractor: IncludeExtractor,
    normalizer: Normalizer,
    visited: VisitedSet,
    skip_name: Option<OsString>,
    exclude: Vec<Pattern>,
}

impl<'a, S: SourceTree + ?Sized> Amalgamator<'a, S> {
    /// Create an amalgamator with an empty visited set
    pub fn new(source: &'a S, extractor: IncludeExtractor, normalizer: Normalizer) -> Self {
        Self {
            source,
            extractor,
            normalizer,
            visited: VisitedSet::new(),
            skip_name: None,
            exclude: Vec::new(),
        }
    }

    /// Create an amalgamator with the scope, guard, skip and exclude rules of
    /// `config`
    pub fn from_config(source: &'a S, config: &Config) -> Result<Self> {
        let amalgamator = Self::new(
            source,
            IncludeExtractor::new(config.scope_prefix.clone())?,
            Normalizer::new(config.guard_marker.clone())?,
        )
        .with_skip_name(config.output_file_name()?)
        .with_exclude(config.exclude_patterns()?);
        Ok(amalgamator)
    }

    /// Skip any traversal entry with this file or directory name
    pub fn with_skip_name(mut self, name: &OsStr) -> Self {
        self.skip_name = Some(name.to_os_string());
        self
    }

    /// Skip traversal entries whose path matches one of these globs
    pub fn with_exclude(mut self, patterns: Vec<Pattern>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Paths emitted so far
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Resolve one file into its self-contained, normalized body.
    ///
    /// Returns an empty string if the file was already emitted by this
    /// amalgamator.
    pub fn resolve(&mut self, path: &Path) -> Result<String> {
        self.resolve_from(path, None)
    }

    fn resolve_from(&mut self, path: &Path, included_from: Option<&Path>) -> Result<String> {
        let key = normalize(path);
        if !self.visited.mark(&key) {
            trace!("Already emitted {}", key.display());
            return Ok(String::new());
        }
        debug!("Amalgamating {}", key.display());

        let text = self
            .source
            .read_to_string(&key)
            .map_err(|e| missing_include(e, included_from))?;
        let directives = self.extractor.extract(&text);

        let mut body = String::with_capacity(text.len());
        let mut cursor = 0;
        for directive in &directives {
            trace!("{}: {}", key.display(), directive.text.trim());
            let contribution = self.resolve_from(directive.target_path(), Some(&key))?;
            body.push_str(&text[cursor..directive.span.start]);
            body.push_str(&contribution);
            cursor = directive.span.end;
        }
        body.push_str(&text[cursor..]);

        Ok(self.normalizer.normalize(&body))
    }

    /// Resolve every file under `root` and concatenate the results in
    /// traversal order.
    pub fn resolve_dir(&mut self, root: &Path) -> Result<String> {
        let files = self.top_level_files(root)?;
        if files.is_empty() {
            warn!("No files to amalgamate under {}", root.display());
        }
        let mut result = String::new();
        for path in files {
            result.push_str(&self.resolve(&path)?);
        }
        Ok(result)
    }

    /// Files under `root` in traversal order, minus the previous output and
    /// anything excluded
    pub fn top_level_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = normalize(root);
        let mut files = self.source.list_files(&root)?;
        files.retain(|path| !self.is_skipped(&root, path));
        Ok(files)
    }

    /// Amalgamate `root` into a complete header: one guard marker, a blank
    /// line, then every resolved body.
    pub fn amalgamate(&mut self, root: &Path) -> Result<Amalgamation> {
        let body = self.resolve_dir(root)?;
        let text = format!("{}\n\n{}", self.normalizer.guard_marker(), body);
        Ok(Amalgamation {
            text,
            files: self.visited.iter().cloned().collect(),
        })
    }

    fn is_skipped(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        if let Some(skip) = &self.skip_name {
            if relative.components().any(|c| c.as_os_str() == skip.as_os_str()) {
                debug!("Skipping previous output {}", path.display());
                return true;
            }
        }
        let slashed = to_slash(path);
        if self.exclude.iter().any(|p| p.matches(&slashed)) {
            debug!("Excluded {}", path.display());
            return true;
        }
        false
    }
}

/// A file that is missing when named by an include is reported with the
/// including file
pub(crate) fn missing_include(error: Error, included_from: Option<&Path>) -> Error {
    match (error, included_from) {
        (Error::Read { path, source }, Some(from)) if source.kind() == io::ErrorKind::NotFound => {
            Error::MissingInclude {
                path,
                included_from: from.to_path_buf(),
            }
        }
        (error, _) => error,
    }
}
