// CLI module
// Command-line interface, argument parsing and subcommand dispatch

mod args;

pub use args::{CliArgs, Command};

use crate::dates::{date_range, parse_day_count, reformat_dates};
use crate::report::fees_report_with;
use crate::types::LateFeeError;
use clap::Parser;
use std::fs;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// --help), clap displays an error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Execute a parsed subcommand, writing any user-facing output to `out`
pub fn run(command: &Command, out: &mut dyn Write) -> Result<(), LateFeeError> {
    match command {
        Command::Report {
            infile,
            outfile,
            daily_rate,
            print,
        } => {
            fees_report_with(daily_rate, infile, outfile)?;
            if *print {
                out.write_all(fs::read_to_string(outfile)?.as_bytes())?;
            }
        }
        Command::Reformat { dates } => {
            for date in reformat_dates(dates)? {
                writeln!(out, "{}", date)?;
            }
        }
        Command::Range { start, n } => {
            for date in date_range(start, parse_day_count(n)?)? {
                writeln!(out, "{}", date)?;
            }
        }
    }

    Ok(())
}
