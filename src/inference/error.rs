//! Error types for type inference

use thiserror::Error;

/// Errors that can occur while configuring or running type inference
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// Random-percentage sampling probability outside `[0, 1]`
    #[error("Invalid sampling probability: {0} (expected a value between 0 and 1)")]
    InvalidPercentage(f64),

    /// Negative record count for first-N or reservoir sampling
    #[error("Invalid sample size: {0} (expected a non-negative record count)")]
    InvalidSampleSize(i64),

    /// Delimited text could not be read as records
    #[error("CSV error at line {line}: {message}")]
    Csv { line: u64, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for InferenceError {
    fn from(e: std::io::Error) -> Self {
        InferenceError::Io(e.to_string())
    }
}

impl From<csv::Error> for InferenceError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line()).unwrap_or(0);
        match e.into_kind() {
            csv::ErrorKind::Io(io) => InferenceError::Io(io.to_string()),
            kind => InferenceError::Csv {
                line,
                message: csv_kind_message(&kind),
            },
        }
    }
}

fn csv_kind_message(kind: &csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields, found {}", expected_len, len),
        other => format!("{:?}", other),
    }
}
