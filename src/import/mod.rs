//! Import functionality
//!
//! Reads tabular sources into record streams for type inference:
//! - Delimited text (CSV and other single-byte delimiters) with a header row

pub mod delimited;

pub use delimited::{CsvImporter, CsvRecords, describe_file, describe_reader};
