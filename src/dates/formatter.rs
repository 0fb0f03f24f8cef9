//! ISO to display date reformatting

use crate::config::{DISPLAY_DATE_FORMAT, ISO_DATE_FORMAT};
use crate::dates::parse_date;
use crate::types::LateFeeError;

/// Reformat `YYYY-MM-DD` strings as `DD Mon YYYY`
///
/// Output order and length match the input. The first entry that fails to
/// parse aborts the whole call; no partial results are returned.
///
/// # Examples
///
/// ```
/// use library_late_fees::dates::reformat_dates;
///
/// let formatted = reformat_dates(["2001-01-20", "2021-12-05"]).unwrap();
/// assert_eq!(formatted, vec!["20 Jan 2001", "05 Dec 2021"]);
/// ```
pub fn reformat_dates<I, S>(old_dates: I) -> Result<Vec<String>, LateFeeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    old_dates
        .into_iter()
        .map(|date| {
            parse_date("date", date.as_ref(), ISO_DATE_FORMAT)
                .map(|parsed| parsed.format(DISPLAY_DATE_FORMAT).to_string())
        })
        .collect()
}
