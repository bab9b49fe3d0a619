//! Run configuration.
//!
//! Only the directory walk is tunable. The substitution rules are fixed.

/// Options for [`crate::minify_tree`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct MinifyConfig {
    /// Whether to descend into symlinked directories.
    ///
    /// **Defaults to `false`.** Symlinked files are still rewritten when they
    /// resolve to a regular file, which writes through to the link target.
    pub follow_links: bool,
    /// Maximum directory traversal depth; the root is depth 0.
    /// Defaults to unlimited.
    pub max_depth: usize,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: usize::MAX,
        }
    }
}
