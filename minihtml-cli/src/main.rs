// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: the final error is reported on stderr.
// - exit: a non-zero status tells the shell the walk did not complete.
#![allow(clippy::print_stderr, clippy::exit)]

use minihtml_cli::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
