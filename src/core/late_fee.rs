//! Late-fee calculation for a single return record
//!
//! The fee is the whole number of days between the due date and the return
//! date, multiplied by the schedule's daily rate and floored at zero. Books
//! returned early earn no credit.

use crate::config::{FeeSchedule, FEE_DECIMAL_PLACES, RETURN_DATE_FORMAT};
use crate::dates::parse_date;
use crate::types::{LateFeeError, ReturnRecord};
use rust_decimal::{Decimal, RoundingStrategy};

/// Calculate the late fee for one return record at the default rate
///
/// # Examples
///
/// ```
/// use library_late_fees::core::calculate_late_fee;
/// use library_late_fees::types::ReturnRecord;
/// use rust_decimal::Decimal;
///
/// let record = ReturnRecord::new("P1", "3/1/2021", "3/5/2021");
/// assert_eq!(calculate_late_fee(&record).unwrap(), Decimal::new(100, 2));
/// ```
pub fn calculate_late_fee(record: &ReturnRecord) -> Result<Decimal, LateFeeError> {
    late_fee_for(record, &FeeSchedule::default())
}

/// Calculate the late fee for one return record with a custom schedule
pub fn late_fee_for(record: &ReturnRecord, schedule: &FeeSchedule) -> Result<Decimal, LateFeeError> {
    late_fee_between(&record.date_due, &record.date_returned, schedule).map_err(|e| match e {
        LateFeeError::ArithmeticOverflow {
            operation,
            patron: None,
        } => LateFeeError::ArithmeticOverflow {
            operation,
            patron: Some(record.patron_id.clone()),
        },
        other => other,
    })
}

/// Calculate the late fee from raw `M/D/YYYY` date strings
///
/// # Returns
///
/// `max(days_late * daily_rate, 0)` rounded to two decimal places.
///
/// # Errors
///
/// - `InvalidDate` naming `date_returned` or `date_due` if either fails to parse
/// - `ArithmeticOverflow` if the fee does not fit in a Decimal
pub fn late_fee_between(
    date_due: &str,
    date_returned: &str,
    schedule: &FeeSchedule,
) -> Result<Decimal, LateFeeError> {
    let returned = parse_date("date_returned", date_returned, RETURN_DATE_FORMAT)?;
    let due = parse_date("date_due", date_due, RETURN_DATE_FORMAT)?;

    let days_late = (returned - due).num_days();
    let fee = Decimal::from(days_late)
        .checked_mul(schedule.daily_rate)
        .ok_or_else(|| LateFeeError::arithmetic_overflow("late fee", None))?;

    Ok(fee
        .max(Decimal::ZERO)
        .round_dp_with_strategy(FEE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
}
