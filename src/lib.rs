//! CSV Describe - guess the column types of delimited text files
//!
//! Provides:
//! - Per-value type classification (integer, decimal, boolean, string)
//! - Per-column accumulation and best-fit type reduction
//! - Record sampling (first-N, reservoir, random percentage, full population)
//! - CSV record import
//! - The `csvdesc` command-line tool (feature `cli`)

pub mod import;
pub mod inference;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use import::{CsvImporter, describe_file, describe_reader};
pub use inference::{
    ColumnGuesses, InferenceConfig, InferenceError, Record, SamplingConfig, TypeGuess,
    TypeInferrer, TypeTag, infer,
};
