//! Fee ledger
//!
//! This module provides the `FeeLedger` struct which accumulates late fees per
//! patron while a report is being built.
//!
//! The ledger is responsible for:
//! - Starting unseen patrons at a zero balance
//! - Summing each record's fee into the patron's running total
//! - Producing report rows in first-seen patron order

use crate::config::FEE_DECIMAL_PLACES;
use crate::types::{FeeReportRow, LateFeeError, PatronId};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Running per-patron late-fee totals
///
/// Backed by an `IndexMap`, so iteration order is the order in which patrons
/// were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeLedger {
    fees: IndexMap<PatronId, Decimal>,
}

impl FeeLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `fee` to the running total for `patron_id`
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the total would not fit in a Decimal;
    /// the existing total is left unchanged in that case.
    pub fn add(&mut self, patron_id: &str, fee: Decimal) -> Result<(), LateFeeError> {
        debug_assert!(fee >= Decimal::ZERO, "late fees are floored at zero");

        let total = self
            .fees
            .entry(patron_id.to_string())
            .or_insert(Decimal::ZERO);

        *total = total
            .checked_add(fee)
            .ok_or_else(|| LateFeeError::arithmetic_overflow("fee total", Some(patron_id)))?;

        Ok(())
    }

    /// Current total for a patron, if they have been seen
    pub fn get(&self, patron_id: &str) -> Option<Decimal> {
        self.fees.get(patron_id).copied()
    }

    /// Number of distinct patrons
    pub fn len(&self) -> usize {
        self.fees.len()
    }

    /// Whether no patron has been recorded
    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }

    /// Iterate `(patron_id, total)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&PatronId, &Decimal)> {
        self.fees.iter()
    }

    /// Build one report row per patron with fees rendered to two decimals
    pub fn report_rows(&self) -> Vec<FeeReportRow> {
        self.fees
            .iter()
            .map(|(patron_id, total)| FeeReportRow {
                patron_id: patron_id.clone(),
                late_fees: format!("{:.*}", FEE_DECIMAL_PLACES as usize, total),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(patron_id: &str, late_fees: &str) -> FeeReportRow {
        FeeReportRow {
            patron_id: patron_id.to_string(),
            late_fees: late_fees.to_string(),
        }
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = FeeLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.report_rows().is_empty());
    }

    #[test]
    fn test_add_starts_unseen_patron_at_zero() {
        let mut ledger = FeeLedger::new();
        ledger.add("P1", Decimal::new(75, 2)).unwrap();
        assert_eq!(ledger.get("P1"), Some(Decimal::new(75, 2)));
        assert_eq!(ledger.get("P2"), None);
    }

    #[test]
    fn test_add_accumulates() {
        let mut ledger = FeeLedger::new();
        ledger.add("P1", Decimal::new(100, 2)).unwrap();
        ledger.add("P1", Decimal::new(50, 2)).unwrap();
        ledger.add("P1", Decimal::ZERO).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("P1"), Some(Decimal::new(150, 2)));
    }

    #[test]
    fn test_report_rows_follow_first_seen_order() {
        let mut ledger = FeeLedger::new();
        ledger.add("zed", Decimal::new(25, 2)).unwrap();
        ledger.add("amy", Decimal::ZERO).unwrap();
        ledger.add("zed", Decimal::new(25, 2)).unwrap();
        ledger.add("bob", Decimal::new(1000, 2)).unwrap();

        assert_eq!(
            ledger.report_rows(),
            vec![row("zed", "0.50"), row("amy", "0.00"), row("bob", "10.00")]
        );
    }

    #[rstest]
    #[case::zero(Decimal::ZERO, "0.00")]
    #[case::one_decimal(Decimal::new(125, 1), "12.50")]
    #[case::integer(Decimal::new(3, 0), "3.00")]
    #[case::large(Decimal::new(123456725, 2), "1234567.25")]
    fn test_report_rows_render_two_decimals(#[case] total: Decimal, #[case] expected: &str) {
        let mut ledger = FeeLedger::new();
        ledger.add("P1", total).unwrap();
        assert_eq!(ledger.report_rows(), vec![row("P1", expected)]);
    }

    #[test]
    fn test_add_overflow_keeps_total() {
        let mut ledger = FeeLedger::new();
        ledger.add("P1", Decimal::MAX).unwrap();

        let result = ledger.add("P1", Decimal::ONE);

        assert_eq!(result, Err(LateFeeError::arithmetic_overflow("fee total", Some("P1"))));
        assert_eq!(ledger.get("P1"), Some(Decimal::MAX));
    }
}
