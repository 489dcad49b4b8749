use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read access to a directory tree, as needed by rule collection.
///
/// The trait deliberately covers just two operations so the collector can
/// run against the real filesystem or an in-memory tree in tests. All
/// paths handed to a source are relative to its root; the empty path names
/// the root itself.
///
/// Entry names are UTF-8 strings. Sources backed by filesystems that allow
/// non-UTF-8 names convert them lossily; patterns are UTF-8 text, so such
/// names can only match through wildcards.
pub trait TreeSource {
    /// Lists the entries of the directory at `dir`.
    ///
    /// The order of the returned entries is not significant; the collector
    /// sorts them before use.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<TreeEntry>>;

    /// Reads the contents of the file at `path`.
    fn read_file(&self, path: &Path) -> io::Result<String>;
}

/// One directory entry reported by a [`TreeSource`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    name: String,
    is_dir: bool,
}

impl TreeEntry {
    /// Creates an entry describing a file.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Creates an entry describing a directory.
    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Returns the entry name (one path segment, no separators).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the entry is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// [`TreeSource`] backed by the real filesystem.
///
/// Directory entries are reported in ascending name order. Symlinks are
/// reported as files regardless of their target, so collection cannot be
/// led into a cycle.
#[derive(Clone, Debug)]
pub struct OsTree {
    root: PathBuf,
}

impl OsTree {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root all relative paths resolve against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TreeSource for OsTree {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<TreeEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.root.join(dir))? {
            let entry = entry?;
            // DirEntry::file_type does not follow symlinks.
            let is_dir = entry.file_type()?.is_dir();
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(if is_dir {
                TreeEntry::dir(name)
            } else {
                TreeEntry::file(name)
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.root.join(path))
    }
}
