//! Error types for page minification.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MinifyError>;

/// Every failure aborts the run; see [`crate::minify_tree`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MinifyError {
    /// The scan root does not exist.
    #[error("Path does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    /// A directory could not be listed (permission denied, symlink loop, ...).
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A selected page could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The page being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A selected page is not valid UTF-8 text.
    #[error("{} is not valid UTF-8", path.display())]
    InvalidEncoding {
        /// The page being decoded.
        path: PathBuf,
    },

    /// A rewritten page could not be written back.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// The page being overwritten.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The progress stream rejected a write.
    #[error("Failed to write progress output: {0}")]
    Progress(#[source] io::Error),
}

impl MinifyError {
    /// The file or directory the error is about, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::MissingRoot(path)
            | Self::Read { path, .. }
            | Self::InvalidEncoding { path }
            | Self::Write { path, .. } => Some(path),
            Self::Walk(err) => err.path(),
            Self::Progress(_) => None,
        }
    }
}
