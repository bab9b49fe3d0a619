//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the
//! per-page progress lines and the optional summary.

use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a filter directive.
#[must_use]
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: u8) {
    let filter = EnvFilter::new(level_for(verbose));
    // Err only when a subscriber is already set (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
