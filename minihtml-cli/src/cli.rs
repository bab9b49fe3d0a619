use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use minihtml::{MinifyConfig, MinifyReport, minify_tree, output};
use tracing::debug;

use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "minihtml", version, about = "Minify the HTML pages under a directory in place")]
pub struct Cli {
    /// Directory to scan recursively for `*.html` pages
    pub root: PathBuf,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Print a report once every page has been rewritten
    #[arg(long)]
    pub summary: bool,

    /// Report format used by --summary
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Human,
    Json,
}

impl Cli {
    fn config(&self) -> MinifyConfig {
        let mut config = MinifyConfig::default();
        config.follow_links = self.follow_links;
        config
    }
}

/// Parse arguments, set up logging and run.
///
/// # Errors
/// Returns an error if the walk fails or stdout cannot be written.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)?;
    Ok(())
}

/// Run a parsed command line, writing progress and the optional report to `out`.
///
/// # Errors
/// Returns an error if the walk fails or `out` cannot be written.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> Result<MinifyReport> {
    debug!(root = %cli.root.display(), follow_links = cli.follow_links, "starting walk");
    let report = minify_tree(&cli.root, &cli.config(), out)?;

    if cli.summary {
        match cli.format {
            ReportFormat::Human => output::write_human(&report, out)?,
            ReportFormat::Json => output::write_json(&report, out)?,
        }
    }
    out.flush()?;
    Ok(report)
}
