//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over return records from a CSV file.
//!
//! # Design
//!
//! The ReturnReader reads one raw row at a time into a reused `StringRecord`
//! and deserializes it against the header row. The row's starting line is
//! kept so callers can attach it to errors raised after deserialization,
//! such as a malformed date.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors, unreadable header) are returned from `new()`
//! - Row errors (malformed CSV, missing columns) are yielded as Err variants
//!
//! # Resource Handling
//!
//! The file handle is owned by the inner `csv::Reader` and is closed when the
//! ReturnReader is dropped, including when iteration stops early.

use crate::types::{LateFeeError, ReturnRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous return-record reader
///
/// # Examples
///
/// ```no_run
/// use library_late_fees::io::ReturnReader;
/// use std::path::Path;
///
/// let reader = ReturnReader::new(Path::new("book_returns.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(record) => println!("{} returned a book", record.patron_id),
///         Err(e) => eprintln!("Error: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct ReturnReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
    line: u64,
}

impl ReturnReader {
    /// Create a new ReturnReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from header names only; field values are kept verbatim
    /// - Allow flexible field counts (short rows surface as missing-column errors)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `IoError` if the file could not be opened or read
    /// * `ParseError` if the header row is not valid CSV
    pub fn new(path: &Path) -> Result<Self, LateFeeError> {
        let file = File::open(path).map_err(|e| LateFeeError::open_failed(path, e))?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            line: 1,
        })
    }

    /// Line on which the most recently yielded row starts
    ///
    /// The header is line 1, so the first data row is normally line 2.
    pub fn line(&self) -> u64 {
        self.line
    }
}

impl Iterator for ReturnReader {
    type Item = Result<ReturnRecord, LateFeeError>;

    /// Get the next return record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(ReturnRecord))` - Successfully parsed record
    /// * `Some(Err(LateFeeError))` - CSV or deserialization error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                self.line = self
                    .record
                    .position()
                    .map_or(self.line + 1, |pos| pos.line());
                Some(
                    self.record
                        .deserialize::<ReturnRecord>(Some(&self.headers))
                        .map_err(LateFeeError::from),
                )
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
