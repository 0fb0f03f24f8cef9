//! CSV format handling for the fee report output
//!
//! Writes report rows with the header `patron_id,late_fees`. Pure with
//! respect to the filesystem: it writes to any `Write` so it can be tested
//! against an in-memory buffer.

use crate::types::{FeeReportRow, LateFeeError};
use csv::{Terminator, WriterBuilder};
use std::io::Write;

/// Column names of the fee report, in output order
pub const REPORT_HEADER: [&str; 2] = ["patron_id", "late_fees"];

/// Write fee report rows to CSV format
///
/// Every line, the header included, ends in `\r\n`. The header is always written, so an empty slice yields a header-only
/// report. Rows are written in the order given.
///
/// # Errors
///
/// Returns `IoError` if writing or flushing the output fails.
pub fn write_fee_report_csv(
    rows: &[FeeReportRow],
    output: &mut dyn Write,
) -> Result<(), LateFeeError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(output);

    writer.write_record(REPORT_HEADER)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}
