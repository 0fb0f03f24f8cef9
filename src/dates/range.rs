//! Consecutive calendar-day ranges
//!
//! Both functions step one calendar day at a time from a `YYYY-MM-DD` start
//! date and return a fully materialized vector.

use crate::config::ISO_DATE_FORMAT;
use crate::dates::parse_date;
use crate::types::LateFeeError;
use chrono::{Days, NaiveDate};

/// Generate `n` consecutive dates beginning at `start`
///
/// A zero or negative `n` yields an empty vector. `start` is validated even
/// then.
///
/// # Errors
///
/// - `InvalidDate` if `start` is not `YYYY-MM-DD`
/// - `DateOutOfRange` if the last date would exceed chrono's calendar
pub fn date_range(start: &str, n: i64) -> Result<Vec<NaiveDate>, LateFeeError> {
    let first = parse_date("start", start, ISO_DATE_FORMAT)?;
    let count = u64::try_from(n).unwrap_or(0);

    // Reject an unrepresentable tail before allocating anything
    if count > 0 {
        offset_date(first, count - 1)?;
    }

    (0..count).map(|offset| offset_date(first, offset)).collect()
}

/// Pair each value with a consecutive date beginning at `start_date`
///
/// The i-th value (0-indexed) is paired with `start_date + i` days, in input
/// order. Pass `slice.iter()` to keep ownership of the values.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use library_late_fees::dates::add_date_range;
///
/// let pairs = add_date_range([100, 200], "2021-02-28").unwrap();
/// assert_eq!(pairs[1], (NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(), 200));
/// ```
pub fn add_date_range<I, T>(values: I, start_date: &str) -> Result<Vec<(NaiveDate, T)>, LateFeeError>
where
    I: IntoIterator<Item = T>,
{
    let first = parse_date("start_date", start_date, ISO_DATE_FORMAT)?;

    values
        .into_iter()
        .zip(0u64..)
        .map(|(value, offset)| offset_date(first, offset).map(|date| (date, value)))
        .collect()
}

/// Parse a day count supplied as text
///
/// This is the runtime form of the "n must be an integer" contract: callers
/// holding untyped input (command-line arguments) go through here before
/// calling [`date_range`].
pub fn parse_day_count(text: &str) -> Result<i64, LateFeeError> {
    text.trim().parse::<i64>().map_err(|_| {
        LateFeeError::invalid_argument("n", format!("expected an integer, got '{}'", text))
    })
}

fn offset_date(start: NaiveDate, offset: u64) -> Result<NaiveDate, LateFeeError> {
    start
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| LateFeeError::date_out_of_range(start, offset))
}
