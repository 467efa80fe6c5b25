//! Source tree access for the amalgamator
//!
//! The amalgamator never touches `std::fs` directly. It reads files and lists
//! directories through [`SourceTree`], which has a disk-backed implementation
//! for real runs and an in-memory one for tests and benchmarks.
//!
//! All paths handed to and returned from a `SourceTree` are relative to the
//! tree's include root and lexically normalized.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::normalize;

/// Read access to a tree of text files
pub trait SourceTree {
    /// Read a whole file as UTF-8 text.
    ///
    /// Fails with [`Error::Read`] when the file cannot be read and
    /// [`Error::Encoding`] when it is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List every file below `root`, depth-first, in a deterministic order.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })
}

/// A source tree rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct DiskTree {
    base: PathBuf,
}

impl DiskTree {
    /// Create a tree whose relative paths resolve against `base`
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self { base: base.into() }
    }

    /// The directory relative paths resolve against
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl SourceTree for DiskTree {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(self.base.join(path)).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        decode(path, bytes)
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walk_root = self.base.join(root);
        let mut files = Vec::new();

        for entry in WalkDir::new(&walk_root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| Error::Walk {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| walk_root.clone()),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            // Entries always live under the walk root
            let relative = entry
                .path()
                .strip_prefix(&walk_root)
                .map_err(|e| Error::Walk {
                    path: entry.path().to_path_buf(),
                    message: e.to_string(),
                })?;
            files.push(normalize(&root.join(relative)));
        }

        Ok(files)
    }
}

/// In-memory source tree for fast, hermetic runs
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    /// Files stored as normalized path -> raw bytes
    files: BTreeMap<PathBuf, Vec<u8>>,
    /// Directories added without any file below them
    dirs: BTreeSet<PathBuf>,
}

impl MemoryTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file with raw content
    pub fn add_file_content<P: AsRef<Path>>(&mut self, path: P, content: Vec<u8>) {
        self.files.insert(normalize(path.as_ref()), content);
    }

    /// Add or replace a file with string content
    pub fn add_file_string<P: AsRef<Path>>(&mut self, path: P, content: &str) {
        self.add_file_content(path, content.as_bytes().to_vec());
    }

    /// Add a directory, which may stay empty
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) {
        self.dirs.insert(normalize(path.as_ref()));
    }

    /// Builder-style variant of [`MemoryTree::add_dir`]
    pub fn with_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.add_dir(path);
        self
    }

    /// Builder-style variant of [`MemoryTree::add_file_string`]
    pub fn with_file<P: AsRef<Path>>(mut self, path: P, content: &str) -> Self {
        self.add_file_string(path, content);
        self
    }

    /// Check if a file exists
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.files.contains_key(&normalize(path.as_ref()))
    }

    /// Get the number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceTree for MemoryTree {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self
            .files
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| Error::Read {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })?;
        decode(path, bytes)
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = normalize(root);
        let files: Vec<PathBuf> = self
            .files
            .keys()
            .filter(|path| path.starts_with(&root) && **path != root)
            .cloned()
            .collect();

        // A directory exists once added or once a file lives below it
        let is_dir = !files.is_empty() || self.dirs.iter().any(|dir| dir.starts_with(&root));
        if !is_dir {
            return Err(Error::Walk {
                path: root,
                message: "no such directory".to_string(),
            });
        }
        Ok(files)
    }
}
