use crate::config::FeeSchedule;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Compute library late-fee reports from book-return CSV files
#[derive(Parser, Debug)]
#[command(name = "late-fees")]
#[command(about = "Compute library late-fee reports from book-return CSV files", long_about = None)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate late fees per patron into a summary CSV
    Report {
        /// Input CSV with patron_id, date_due and date_returned columns
        #[arg(value_name = "INFILE")]
        infile: PathBuf,

        /// Output CSV path (created or overwritten)
        #[arg(value_name = "OUTFILE")]
        outfile: PathBuf,

        /// Fee charged per day late
        #[arg(long = "daily-rate", value_name = "RATE", default_value = "0.25")]
        daily_rate: FeeSchedule,

        /// Print the written report to stdout
        #[arg(long = "print")]
        print: bool,
    },

    /// Reformat YYYY-MM-DD dates as DD Mon YYYY
    Reformat {
        /// Dates to reformat
        #[arg(value_name = "DATE", required = true)]
        dates: Vec<String>,
    },

    /// Print N consecutive dates starting at START
    Range {
        /// First date, YYYY-MM-DD
        #[arg(value_name = "START")]
        start: String,

        /// Number of days; zero or negative prints nothing
        #[arg(value_name = "N", allow_hyphen_values = true)]
        n: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[test]
    fn test_report_parsing_defaults() {
        let parsed = CliArgs::try_parse_from(["late-fees", "report", "in.csv", "out.csv"]).unwrap();
        match parsed.command {
            Command::Report {
                infile,
                outfile,
                daily_rate,
                print,
            } => {
                assert_eq!(infile, PathBuf::from("in.csv"));
                assert_eq!(outfile, PathBuf::from("out.csv"));
                assert_eq!(daily_rate, FeeSchedule::default());
                assert!(!print);
            }
            other => panic!("Expected report, got {:?}", other),
        }
        assert_eq!(parsed.verbose, 0);
    }

    #[test]
    fn test_report_parsing_options() {
        let parsed = CliArgs::try_parse_from([
            "late-fees",
            "-vv",
            "report",
            "--daily-rate",
            "0.50",
            "--print",
            "in.csv",
            "out.csv",
        ])
        .unwrap();

        assert_eq!(parsed.verbose, 2);
        match parsed.command {
            Command::Report {
                daily_rate, print, ..
            } => {
                assert_eq!(daily_rate.daily_rate, Decimal::new(50, 2));
                assert!(print);
            }
            other => panic!("Expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_range_accepts_negative_count() {
        let parsed = CliArgs::try_parse_from(["late-fees", "range", "2021-03-01", "-4"]).unwrap();
        match parsed.command {
            Command::Range { start, n } => {
                assert_eq!(start, "2021-03-01");
                assert_eq!(n, "-4");
            }
            other => panic!("Expected range, got {:?}", other),
        }
    }

    #[test]
    fn test_reformat_collects_dates() {
        let parsed =
            CliArgs::try_parse_from(["late-fees", "reformat", "2001-01-20", "2001-01-21"]).unwrap();
        match parsed.command {
            Command::Reformat { dates } => assert_eq!(dates, vec!["2001-01-20", "2001-01-21"]),
            other => panic!("Expected reformat, got {:?}", other),
        }
    }

    #[rstest]
    #[case::missing_subcommand(&["late-fees"])]
    #[case::missing_outfile(&["late-fees", "report", "in.csv"])]
    #[case::bad_rate(&["late-fees", "report", "--daily-rate", "lots", "in.csv", "out.csv"])]
    #[case::reformat_without_dates(&["late-fees", "reformat"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
