//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - Fee report serialization
//! - `return_reader` - Synchronous return-record reader with iterator interface

pub mod csv_format;
pub mod return_reader;

pub use csv_format::{write_fee_report_csv, REPORT_HEADER};
pub use return_reader::ReturnReader;
