//! Return record types
//!
//! This module defines the book-return record read from the input CSV and the
//! report row written to the output CSV.

use serde::{Deserialize, Serialize};

/// Patron identifier
///
/// Treated as an opaque string; no format is imposed on it.
pub type PatronId = String;

/// Input return record from CSV
///
/// Represents a single book return as read from the input CSV file.
/// Only the three columns below are required; any other columns in the
/// file are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReturnRecord {
    /// The patron who returned the book
    pub patron_id: PatronId,

    /// Due date in `M/D/YYYY` form (leading zeros optional)
    pub date_due: String,

    /// Return date in `M/D/YYYY` form (leading zeros optional)
    pub date_returned: String,
}

impl ReturnRecord {
    /// Create a record from its three fields
    pub fn new(patron_id: &str, date_due: &str, date_returned: &str) -> Self {
        ReturnRecord {
            patron_id: patron_id.to_string(),
            date_due: date_due.to_string(),
            date_returned: date_returned.to_string(),
        }
    }
}

/// One row of the fee report
///
/// `late_fees` is already rendered with exactly two decimal places so the
/// row can be serialized as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeReportRow {
    /// The patron this total belongs to
    pub patron_id: PatronId,

    /// Accumulated late fees, fixed-point with two decimals (e.g. `12.50`)
    pub late_fees: String,
}
