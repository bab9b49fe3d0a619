//! Run report types.

use serde::Serialize;

use crate::rewrite::FileOutcome;

/// Result of a complete walk.
///
/// Only produced when every selected page was rewritten; a failed run
/// returns the error instead.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct MinifyReport {
    /// Number of pages rewritten.
    pub processed_files: usize,
    /// Total size of all pages before rewriting.
    pub bytes_before: u64,
    /// Total size of all pages after rewriting.
    pub bytes_after: u64,
    /// Per-page outcomes, in walk order.
    pub files: Vec<FileOutcome>,
}

impl MinifyReport {
    /// Add one rewritten page to the totals.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.processed_files += 1;
        self.bytes_before = self.bytes_before.saturating_add(outcome.bytes_before);
        self.bytes_after = self.bytes_after.saturating_add(outcome.bytes_after);
        self.files.push(outcome);
    }

    /// Bytes removed across all pages; 0 if the pages grew overall.
    #[must_use]
    pub fn bytes_saved(&self) -> u64 {
        self.bytes_before.saturating_sub(self.bytes_after)
    }
}
