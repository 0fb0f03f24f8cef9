//! Error types for the late-fee report tool
//!
//! This module defines every error that can occur while reading return
//! records, doing date arithmetic, or writing reports.
//!
//! # Error Categories
//!
//! - **Date Errors**: malformed date strings, dates outside the calendar range
//! - **Argument Errors**: values that do not satisfy an argument's type contract
//! - **Arithmetic Errors**: fee amounts too large for a Decimal
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **CSV Parsing Errors**: malformed CSV, missing columns
//!
//! None of these are recovered internally. Every error aborts the current
//! operation and is returned to the caller.

use thiserror::Error;

/// Main error type for the late-fee tool
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LateFeeError {
    /// A date string does not match its required pattern
    #[error("Invalid {field} '{value}': expected format {format}")]
    InvalidDate {
        /// Name of the field or argument that held the date
        field: String,
        /// The rejected value
        value: String,
        /// The chrono pattern the value was parsed with
        format: String,
    },

    /// An argument violates its type contract
    ///
    /// Raised when a value that must be an integer arrives as text that is not one.
    #[error("Invalid argument {name}: {message}")]
    InvalidArgument {
        /// Argument name
        name: String,
        /// What was wrong with it
        message: String,
    },

    /// Date arithmetic left the range chrono can represent
    #[error("Date {start} + {offset} days is out of range")]
    DateOutOfRange {
        /// The starting date
        start: String,
        /// Day offset that overflowed
        offset: u64,
    },

    /// Arithmetic overflow while computing or accumulating a fee
    #[error("Arithmetic overflow in {operation}{}", patron.as_ref().map(|p| format!(" for patron {}", p)).unwrap_or_default())]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Patron the fee belongs to (if known)
        patron: Option<String>,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Covers malformed rows and rows missing a required column.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LateFeeError {
    fn from(error: std::io::Error) -> Self {
        LateFeeError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LateFeeError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());
        let message = error.to_string();

        match error.into_kind() {
            csv::ErrorKind::Io(io_error) => io_error.into(),
            _ => LateFeeError::ParseError { line, message },
        }
    }
}

impl LateFeeError {
    /// Create an InvalidDate error
    pub fn invalid_date(field: &str, value: &str, format: &str) -> Self {
        LateFeeError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
            format: format.to_string(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(name: &str, message: impl Into<String>) -> Self {
        LateFeeError::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Create a DateOutOfRange error
    pub fn date_out_of_range(start: impl ToString, offset: u64) -> Self {
        LateFeeError::DateOutOfRange {
            start: start.to_string(),
            offset,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, patron: Option<&str>) -> Self {
        LateFeeError::ArithmeticOverflow {
            operation: operation.to_string(),
            patron: patron.map(str::to_string),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        LateFeeError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Map a failure to open `path` onto the matching error variant
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::file_not_found(path)
        } else {
            LateFeeError::IoError {
                message: format!("Failed to open '{}': {}", path.display(), error),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::invalid_date(
        LateFeeError::InvalidDate {
            field: "date_due".to_string(),
            value: "2021/03/01".to_string(),
            format: "%m/%d/%Y".to_string(),
        },
        "Invalid date_due '2021/03/01': expected format %m/%d/%Y"
    )]
    #[case::invalid_argument(
        LateFeeError::InvalidArgument { name: "n".to_string(), message: "expected an integer, got 'ten'".to_string() },
        "Invalid argument n: expected an integer, got 'ten'"
    )]
    #[case::date_out_of_range(
        LateFeeError::DateOutOfRange { start: "2021-03-01".to_string(), offset: 99 },
        "Date 2021-03-01 + 99 days is out of range"
    )]
    #[case::arithmetic_overflow_with_patron(
        LateFeeError::ArithmeticOverflow { operation: "fee total".to_string(), patron: Some("P1".to_string()) },
        "Arithmetic overflow in fee total for patron P1"
    )]
    #[case::arithmetic_overflow_without_patron(
        LateFeeError::ArithmeticOverflow { operation: "late fee".to_string(), patron: None },
        "Arithmetic overflow in late fee"
    )]
    #[case::file_not_found(
        LateFeeError::FileNotFound { path: "returns.csv".to_string() },
        "File not found: returns.csv"
    )]
    #[case::io_error(
        LateFeeError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        LateFeeError::ParseError { line: Some(42), message: "missing field `date_due`".to_string() },
        "CSV parse error at line 42: missing field `date_due`"
    )]
    #[case::parse_error_without_line(
        LateFeeError::ParseError { line: None, message: "bad row".to_string() },
        "CSV parse error: bad row"
    )]
    fn test_error_display(#[case] error: LateFeeError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_date(
        LateFeeError::invalid_date("date", "2001-13-01", "%Y-%m-%d"),
        LateFeeError::InvalidDate {
            field: "date".to_string(),
            value: "2001-13-01".to_string(),
            format: "%Y-%m-%d".to_string(),
        }
    )]
    #[case::invalid_argument(
        LateFeeError::invalid_argument("n", "not an integer"),
        LateFeeError::InvalidArgument { name: "n".to_string(), message: "not an integer".to_string() }
    )]
    #[case::file_not_found(
        LateFeeError::file_not_found(Path::new("missing.csv")),
        LateFeeError::FileNotFound { path: "missing.csv".to_string() }
    )]
    fn test_helper_functions(#[case] result: LateFeeError, #[case] expected: LateFeeError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LateFeeError = io_error.into();
        assert!(matches!(error, LateFeeError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_open_failed_maps_not_found() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = LateFeeError::open_failed(Path::new("returns.csv"), io_error);
        assert_eq!(error, LateFeeError::file_not_found(Path::new("returns.csv")));
    }

    #[test]
    fn test_open_failed_keeps_other_io_errors() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = LateFeeError::open_failed(Path::new("returns.csv"), io_error);
        assert!(matches!(error, LateFeeError::IoError { .. }));
        assert!(error.to_string().contains("returns.csv"));
    }
}
