//! Core business logic module
//!
//! This module contains the fee computation components:
//! - `late_fee` - Per-record late-fee calculation
//! - `ledger` - Per-patron running totals

pub mod late_fee;
pub mod ledger;

pub use late_fee::{calculate_late_fee, late_fee_between, late_fee_for};
pub use ledger::FeeLedger;
