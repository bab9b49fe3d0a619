//! # minihtml
//!
//! In-place minification of the `*.html` pages under a directory.
//!
//! Each page is loaded whole, run through a fixed list of regular-expression
//! rules and written back to the same path:
//!
//! 1. `.js"` / `.js'` become `.js-min"` / `.js-min'`
//! 2. `.css"` / `.css'` become `.css-min"` / `.css-min'`
//! 3. `.htm"` / `.htm'` become `.html"` / `.html'`
//! 4. whitespace between `>` and `<` is removed
//! 5. whitespace after `>` is removed
//! 6. whitespace before `<` is removed
//!
//! The tool does not parse HTML; `<pre>` blocks and inline scripts are
//! rewritten like everything else.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use minihtml::{MinifyConfig, minify_tree};
//!
//! let mut stdout = std::io::stdout();
//! let report = minify_tree(Path::new("public"), &MinifyConfig::default(), &mut stdout).unwrap();
//! println!("Pages rewritten: {}", report.processed_files);
//! ```

mod config;
mod error;
pub mod output;
mod report;
pub mod rewrite;
pub mod rules;
pub mod walk;

use std::io::Write;
use std::path::Path;

use tracing::info;

pub use config::MinifyConfig;
pub use error::{MinifyError, Result};
pub use report::MinifyReport;
pub use rewrite::{FileOutcome, minify_file};
pub use rules::minify_html;

/// Rewrite every page under `root`, one at a time.
///
/// Before each page is read, `Processing <path>...` is written to `progress`.
///
/// The run is fail-fast: the first traversal, read, decode or write error
/// stops the walk and is returned. Pages rewritten before the failure stay
/// rewritten; pages after it are not touched.
///
/// # Errors
///
/// Returns an error if `root` does not exist, a directory cannot be listed,
/// a page cannot be read, is not UTF-8 or cannot be written, or `progress`
/// cannot be written to.
pub fn minify_tree(
    root: &Path,
    config: &MinifyConfig,
    progress: &mut dyn Write,
) -> Result<MinifyReport> {
    let mut report = MinifyReport::default();

    for page in walk::pages(root, config)? {
        let path = page?;
        writeln!(progress, "Processing {}...", path.display()).map_err(MinifyError::Progress)?;
        report.record(minify_file(&path)?);
    }

    info!(
        root = %root.display(),
        pages = report.processed_files,
        bytes_saved = report.bytes_saved(),
        "minification complete"
    );
    Ok(report)
}
