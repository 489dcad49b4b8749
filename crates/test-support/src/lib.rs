#![deny(unsafe_code)]

//! Shared test utilities for the `indexignore` workspace.
//!
//! [`MemoryTree`] is an in-memory [`TreeSource`] for exercising rule
//! collection without touching the filesystem, including fault injection
//! for the collector's fail-fast policy. [`TempTree`] materializes the
//! same kind of fixture on disk inside a temporary directory.
//!
//! Helpers panic on setup failure; they are meant for tests only.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexignore::{TreeEntry, TreeSource};

/// In-memory directory tree implementing [`TreeSource`].
///
/// Files are registered with [`file`](Self::file); parent directories
/// materialize automatically. Individual paths can be poisoned so reads of
/// them fail, which is how the collector's fail-fast behavior is tested.
///
/// # Examples
///
/// ```
/// use indexignore::collect_rules;
/// use test_support::MemoryTree;
///
/// let tree = MemoryTree::new()
///     .file(".indexignore", "*.log\n")
///     .file("src/main.rs", "");
/// let rules = collect_rules(&tree, ".indexignore").unwrap();
/// assert_eq!(rules.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryTree {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    poisoned_files: BTreeSet<PathBuf>,
    poisoned_dirs: BTreeSet<PathBuf>,
}

impl MemoryTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with `contents`, creating missing parent directories.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, contents.to_owned());
        self
    }

    /// Adds a directory (parents included).
    #[must_use]
    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.dirs.insert(path);
        self
    }

    /// Makes reads of the file at `path` fail with `PermissionDenied`.
    #[must_use]
    pub fn poison_file(mut self, path: impl AsRef<Path>) -> Self {
        self.poisoned_files.insert(path.as_ref().to_path_buf());
        self
    }

    /// Makes listings of the directory at `path` fail with
    /// `PermissionDenied`.
    #[must_use]
    pub fn poison_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.poisoned_dirs.insert(path.as_ref().to_path_buf());
        self
    }

    fn add_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn contains_dir(&self, dir: &Path) -> bool {
        dir.as_os_str().is_empty() || self.dirs.contains(dir)
    }
}

impl TreeSource for MemoryTree {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<TreeEntry>> {
        if self.poisoned_dirs.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "poisoned directory",
            ));
        }
        if !self.contains_dir(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no such directory",
            ));
        }

        let child_name = |path: &Path| -> Option<String> {
            (path.parent() == Some(dir))
                .then(|| path.file_name())
                .flatten()
                .map(|name| name.to_string_lossy().into_owned())
        };

        let mut entries: Vec<TreeEntry> = self
            .dirs
            .iter()
            .filter_map(|path| child_name(path).map(TreeEntry::dir))
            .chain(
                self.files
                    .keys()
                    .filter_map(|path| child_name(path).map(TreeEntry::file)),
            )
            .collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        if self.poisoned_files.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "poisoned file",
            ));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

/// On-disk tree rooted in a temporary directory.
///
/// The directory and everything in it are removed on drop.
#[derive(Debug)]
pub struct TempTree {
    dir: tempfile::TempDir,
}

impl TempTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temporary directory"),
        }
    }

    /// Writes a file (parents included).
    #[must_use]
    pub fn file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        let full = self.dir.path().join(path.as_ref());
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&full, contents).expect("write file");
        self
    }

    /// Creates a directory (parents included).
    #[must_use]
    pub fn dir(self, path: impl AsRef<Path>) -> Self {
        fs::create_dir_all(self.dir.path().join(path.as_ref())).expect("create directory");
        self
    }

    /// Returns the absolute root of the tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}
