//! Whole-file load, minify and overwrite.
//!
//! The page is overwritten in place with a plain `fs::write`: no backup, no
//! temporary file, no rename. A failed write can leave the page truncated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{MinifyError, Result};
use crate::rules::minify_html;

/// What happened to one rewritten page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileOutcome {
    /// The page path, as produced by the walk.
    pub path: PathBuf,
    /// Size of the page before rewriting.
    pub bytes_before: u64,
    /// Size of the page after rewriting.
    pub bytes_after: u64,
}

/// Read a page as UTF-8 text.
///
/// # Errors
///
/// Returns [`MinifyError::Read`] on I/O failure and
/// [`MinifyError::InvalidEncoding`] if the bytes are not UTF-8.
pub fn read_page(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| MinifyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| MinifyError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

/// Overwrite a page with `text`.
///
/// # Errors
///
/// Returns [`MinifyError::Write`] if the file cannot be opened or written.
pub fn write_page(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| MinifyError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Minify a single page in place.
///
/// The page is written back even when no rule matched.
///
/// # Errors
///
/// Returns an error if the page cannot be read, decoded or written.
pub fn minify_file(path: &Path) -> Result<FileOutcome> {
    let original = read_page(path)?;
    let minified = minify_html(&original);
    write_page(path, &minified)?;

    let outcome = FileOutcome {
        path: path.to_path_buf(),
        bytes_before: original.len() as u64,
        bytes_after: minified.len() as u64,
    };
    debug!(
        path = %path.display(),
        before = outcome.bytes_before,
        after = outcome.bytes_after,
        "page rewritten"
    );
    Ok(outcome)
}
