//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Return records and report rows
//! - `error`: Error types for the late-fee tool

pub mod error;
pub mod record;

pub use error::LateFeeError;
pub use record::{FeeReportRow, PatronId, ReturnRecord};
