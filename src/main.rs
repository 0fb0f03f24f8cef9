//! Library Late-Fee Report CLI
//!
//! Command-line interface for computing per-patron late fees from book-return
//! CSV files, plus the date utilities the reports are built around.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- report book_returns.csv book_fees.csv
//! cargo run -- report --daily-rate 0.50 --print book_returns.csv book_fees.csv
//! cargo run -- reformat 2001-01-20 2021-12-05
//! cargo run -- range 2021-03-01 7
//! ```
//!
//! Logs go to stderr; raise the level with `-v` or set `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed date, unwritable output, etc.)

use library_late_fees::cli;
use library_late_fees::logging::{init_logging, LogConfig};
use std::io::IsTerminal;
use std::process;

fn main() {
    let args = cli::parse_args();

    let log_config = LogConfig {
        with_ansi: std::io::stderr().is_terminal(),
        ..LogConfig::from_verbosity(args.verbose)
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args.command, &mut output) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
