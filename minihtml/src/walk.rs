//! Directory walk selecting the pages to rewrite.
//!
//! Every directory under the root is descended into. Only entries whose file
//! name ends in `.html` (case-sensitive) and which resolve to a regular file
//! are selected; `.htm`, `.HTML` and directories named `*.html` are not.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::MinifyConfig;
use crate::error::{MinifyError, Result};

/// File name suffix of the pages that get rewritten.
pub const PAGE_SUFFIX: &str = ".html";

/// Check whether a file name selects the entry for rewriting.
#[must_use]
pub fn is_page_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(PAGE_SUFFIX.as_bytes())
}

/// Lazily yields selected pages in walk order.
///
/// Directories are visited top-down with entries sorted by file name, so a
/// page is yielded before anything in a sibling directory that sorts after it.
/// Traversal errors are yielded as `Err` at the point they occur.
pub struct Pages {
    inner: walkdir::IntoIter,
}

impl Iterator for Pages {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(MinifyError::Walk(err))),
            };

            if !is_page_name(entry.file_name()) {
                continue;
            }

            // Follows a file symlink; skips directories, broken links, pipes, sockets.
            let path = entry.into_path();
            if !path.is_file() {
                debug!(path = %path.display(), "skipping non-regular entry");
                continue;
            }
            return Some(Ok(path));
        }
    }
}

/// Start walking `root`.
///
/// # Errors
///
/// Returns [`MinifyError::MissingRoot`] if `root` does not exist. Errors met
/// during the walk itself are yielded by the iterator.
pub fn pages(root: &Path, config: &MinifyConfig) -> Result<Pages> {
    if !root.exists() {
        return Err(MinifyError::MissingRoot(root.to_path_buf()));
    }
    let inner = WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .sort_by_file_name()
        .into_iter();
    Ok(Pages { inner })
}

/// Collect every page under `root`, failing on the first traversal error.
///
/// # Errors
///
/// Returns an error if `root` does not exist or any directory cannot be read.
pub fn find_pages(root: &Path, config: &MinifyConfig) -> Result<Vec<PathBuf>> {
    pages(root, config)?.collect()
}
