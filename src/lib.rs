//! Library Late-Fee Reports
//!
//! # Overview
//!
//! This library computes per-patron library late fees from CSV records of book
//! returns and writes them as a summary CSV. It also provides the small date
//! utilities the reports are built around.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (ReturnRecord, FeeReportRow, LateFeeError)
//! - [`config`] - Fee schedule and date pattern constants
//! - [`dates`] - Date reformatting and consecutive date ranges
//! - [`core`] - Business logic components:
//!   - [`core::late_fee`] - Per-record late-fee calculation
//!   - [`core::ledger`] - Per-patron running totals
//! - [`io`] - CSV reading and report serialization
//! - [`report`] - The read, aggregate, write pipeline
//! - [`cli`] - CLI arguments parsing and dispatch
//! - [`logging`] - tracing subscriber setup for the binary
//!
//! # Late Fees
//!
//! A record's fee is `days_late * 0.25`, floored at zero and rounded to two
//! decimal places. Returning a book early earns no credit against other late
//! returns. Per-patron totals are reported in the order patrons first appear
//! in the input.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod dates;
pub mod io;
pub mod logging;
pub mod report;
pub mod types;

pub use config::FeeSchedule;
pub use crate::core::{calculate_late_fee, FeeLedger};
pub use dates::{add_date_range, date_range, reformat_dates};
pub use report::{fees_report, fees_report_with};
pub use types::{FeeReportRow, LateFeeError, PatronId, ReturnRecord};
