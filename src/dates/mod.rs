//! Date utilities
//!
//! Standalone helpers over fixed textual date patterns:
//! - `formatter` - reformat ISO dates for display
//! - `range` - consecutive calendar-day ranges
//!
//! All parsing and formatting goes through chrono's `parse_from_str` and
//! `format` with the pattern constants in [`crate::config`].

pub mod formatter;
pub mod range;

pub use formatter::reformat_dates;
pub use range::{add_date_range, date_range, parse_day_count};

use crate::types::LateFeeError;
use chrono::NaiveDate;

/// Parse `value` with the chrono `format`, naming `field` in the error
///
/// chrono's `%Y` accepts any number of digits, so the year token is checked
/// separately: it must be exactly four ASCII digits.
pub(crate) fn parse_date(field: &str, value: &str, format: &str) -> Result<NaiveDate, LateFeeError> {
    if !has_four_digit_year(value, format) {
        return Err(LateFeeError::invalid_date(field, value, format));
    }

    NaiveDate::parse_from_str(value, format)
        .map_err(|_| LateFeeError::invalid_date(field, value, format))
}

/// Whether the component of `value` in the `%Y` slot of `format` is four digits
///
/// Formats without `%Y`, or without a separator, are not checked here.
fn has_four_digit_year(value: &str, format: &str) -> bool {
    let Some(separator) = format.chars().find(|c| !c.is_ascii_alphabetic() && *c != '%') else {
        return true;
    };
    let Some(index) = format.split(separator).position(|part| part == "%Y") else {
        return true;
    };

    value
        .split(separator)
        .nth(index)
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}
