//! Fee report pipeline
//!
//! Orchestrates a report run by coordinating between the ReturnReader (CSV
//! input), the late-fee calculation, the FeeLedger (aggregation), and
//! `csv_format::write_fee_report_csv` (output).
//!
//! # Ordering
//!
//! The whole input is read and aggregated before the output file is opened.
//! A malformed input therefore leaves an existing `outfile` untouched.
//!
//! # Failure
//!
//! There is no row skipping. The first malformed row aborts the run, and
//! totals aggregated up to that point are discarded.

use crate::config::FeeSchedule;
use crate::core::{late_fee_for, FeeLedger};
use crate::io::{write_fee_report_csv, ReturnReader};
use crate::types::LateFeeError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Calculate late fees per patron from `infile` and write the summary to `outfile`
///
/// Uses the default fee schedule (0.25 per day late). `outfile` is created
/// or truncated.
///
/// # Examples
///
/// ```no_run
/// use library_late_fees::report::fees_report;
/// use std::path::Path;
///
/// fees_report(Path::new("book_returns.csv"), Path::new("book_fees.csv"))
///     .expect("report failed");
/// ```
pub fn fees_report(infile: &Path, outfile: &Path) -> Result<(), LateFeeError> {
    fees_report_with(&FeeSchedule::default(), infile, outfile)
}

/// Same as [`fees_report`], with a custom fee schedule
pub fn fees_report_with(
    schedule: &FeeSchedule,
    infile: &Path,
    outfile: &Path,
) -> Result<(), LateFeeError> {
    let ledger = build_fee_ledger(schedule, infile)?;

    let file = File::create(outfile).map_err(|e| LateFeeError::IoError {
        message: format!("Failed to create '{}': {}", outfile.display(), e),
    })?;
    let mut output = BufWriter::new(file);

    write_fee_report(&ledger, &mut output)?;
    output.flush()?;

    tracing::info!(
        patrons = ledger.len(),
        outfile = %outfile.display(),
        "wrote fee report"
    );

    Ok(())
}

/// Read every return record in `infile` and total the fees per patron
///
/// # Errors
///
/// - `FileNotFound` / `IoError` if `infile` cannot be opened or read
/// - `ParseError` for malformed CSV or a missing column
/// - `InvalidDate` for a malformed due or return date
/// - `ArithmeticOverflow` if a fee or total does not fit in a Decimal
pub fn build_fee_ledger(schedule: &FeeSchedule, infile: &Path) -> Result<FeeLedger, LateFeeError> {
    let mut ledger = FeeLedger::new();
    let mut reader = ReturnReader::new(infile)?;
    let mut rows = 0usize;

    while let Some(result) = reader.next() {
        let record = result?;
        let fee = late_fee_for(&record, schedule).inspect_err(|e| {
            tracing::error!(line = reader.line(), error = %e, "invalid return record");
        })?;

        tracing::debug!(
            line = reader.line(),
            patron_id = %record.patron_id,
            %fee,
            "late fee"
        );

        ledger.add(&record.patron_id, fee)?;
        rows += 1;
    }

    tracing::info!(
        rows,
        patrons = ledger.len(),
        infile = %infile.display(),
        "aggregated late fees"
    );

    Ok(ledger)
}

/// Write the ledger as a fee report CSV, patrons in first-seen order
pub fn write_fee_report(ledger: &FeeLedger, output: &mut dyn Write) -> Result<(), LateFeeError> {
    write_fee_report_csv(&ledger.report_rows(), output)
}
