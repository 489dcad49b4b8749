use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error raised while gathering rule files from a tree.
///
/// Collection is fail-fast: the first I/O failure aborts the whole
/// collection, so callers never observe a partially built rule set. A
/// directory without a rule file is not an error.
#[derive(Debug, Error)]
pub enum CollectError {
    /// A directory's contents could not be listed.
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        /// Directory whose contents could not be listed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A rule file existed but could not be read.
    #[error("failed to read rule file '{}': {source}", path.display())]
    ReadFile {
        /// Rule file whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl CollectError {
    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::ReadDir { path, source }
    }

    pub(crate) fn read_file(path: PathBuf, source: io::Error) -> Self {
        Self::ReadFile { path, source }
    }

    /// Returns the path the failed operation was addressing, relative to
    /// the tree root.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. } | Self::ReadFile { path, .. } => path,
        }
    }
}
