//! Fee schedule and date pattern configuration
//!
//! Date patterns are fixed chrono format strings. The fee schedule carries the
//! one tunable value, the daily late-fee rate.

use crate::types::LateFeeError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// ISO calendar date pattern, e.g. `2001-01-20`
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display date pattern, e.g. `20 Jan 2001`
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// Pattern of the due/returned columns in return CSVs, e.g. `3/1/2021`
pub const RETURN_DATE_FORMAT: &str = "%m/%d/%Y";

/// Late fees are reported with this many decimal places
pub const FEE_DECIMAL_PLACES: u32 = 2;

/// Fee configuration for late-fee calculation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Fee charged per day a book is returned after its due date
    pub daily_rate: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            daily_rate: Decimal::new(25, 2),
        }
    }
}

impl FeeSchedule {
    /// Create a FeeSchedule with a custom daily rate
    ///
    /// A negative rate would turn lateness into credit, so it is replaced by
    /// the default rate.
    pub fn new(daily_rate: Decimal) -> Self {
        let default = Self::default();

        let daily_rate = if daily_rate < Decimal::ZERO {
            tracing::warn!(
                %daily_rate,
                default = %default.daily_rate,
                "invalid daily rate, using default"
            );
            default.daily_rate
        } else {
            daily_rate
        };

        Self { daily_rate }
    }
}

impl FromStr for FeeSchedule {
    type Err = LateFeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate = Decimal::from_str(s.trim()).map_err(|_| {
            LateFeeError::invalid_argument(
                "daily-rate",
                format!("expected a decimal number, got '{}'", s),
            )
        })?;
        Ok(Self::new(rate))
    }
}
