//! Delimited text reader
//!
//! Turns a CSV source into a forward-only stream of [`Record`]s keyed by
//! the header row, and runs type inference over it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rand::Rng;

use crate::inference::{ColumnGuesses, InferenceConfig, InferenceError, Record, TypeInferrer};

/// Reads delimited text with a header row into records
#[derive(Debug, Clone)]
pub struct CsvImporter {
    delimiter: u8,
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvImporter {
    /// Create an importer for comma-separated input
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field delimiter (default: comma)
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Open a file as a record stream
    pub fn records_from_path(
        &self,
        path: &Path,
    ) -> Result<CsvRecords<BufReader<File>>, InferenceError> {
        let file = File::open(path)?;
        self.records_from_reader(BufReader::new(file))
    }

    /// Wrap any reader as a record stream; the header row is read eagerly
    pub fn records_from_reader<R: Read>(&self, reader: R) -> Result<CsvRecords<R>, InferenceError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        Ok(CsvRecords {
            reader,
            headers,
            row: StringRecord::new(),
            done: false,
        })
    }

    /// Infer column types of a file
    pub fn describe_path(
        &self,
        path: &Path,
        config: &InferenceConfig,
    ) -> Result<ColumnGuesses, InferenceError> {
        let file = File::open(path)?;
        self.describe_reader(BufReader::new(file), config)
    }

    /// Infer column types of delimited text from any reader
    pub fn describe_reader<R: Read>(
        &self,
        reader: R,
        config: &InferenceConfig,
    ) -> Result<ColumnGuesses, InferenceError> {
        let mut inferrer = TypeInferrer::with_config(config.clone())?;
        self.describe_with(reader, &mut inferrer)
    }

    /// Infer column types using a caller-owned inferrer
    ///
    /// The first malformed row aborts the run. Rows after the sample is
    /// complete (first-N) are never read, so their errors are not seen.
    pub fn describe_with<R: Read, G: Rng>(
        &self,
        reader: R,
        inferrer: &mut TypeInferrer<G>,
    ) -> Result<ColumnGuesses, InferenceError> {
        let records = self.records_from_reader(reader)?;

        let mut failure = None;
        let guesses =
            inferrer.infer(records.map_while(|r| r.map_err(|e| failure = Some(e)).ok()));

        match failure {
            Some(e) => Err(e),
            None => Ok(guesses),
        }
    }
}

/// Record stream over a CSV reader
///
/// Rows shorter than the header yield absent values for the missing
/// columns. Fields beyond the header are ignored. A repeated header name
/// keeps the value of its last column. The stream ends after the first
/// read error.
pub struct CsvRecords<R> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    row: StringRecord,
    done: bool,
}

impl<R> CsvRecords<R> {
    /// Column names from the header row
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for CsvRecords<R> {
    type Item = Result<Record, InferenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_record(&mut self.row) {
            Ok(true) => {
                if self.row.len() > self.headers.len() {
                    tracing::debug!(
                        line = self.row.position().map(|p| p.line()).unwrap_or(0),
                        extra = self.row.len() - self.headers.len(),
                        "Ignoring fields beyond the header"
                    );
                }

                let mut record = Record::new();
                for (i, column) in self.headers.iter().enumerate() {
                    record.push(column.clone(), self.row.get(i).map(str::to_string));
                }
                Some(Ok(record))
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e.into()))
            }
        }
    }
}

/// Infer column types of a CSV file
pub fn describe_file(
    path: impl AsRef<Path>,
    config: &InferenceConfig,
) -> Result<ColumnGuesses, InferenceError> {
    CsvImporter::new().describe_path(path.as_ref(), config)
}

/// Infer column types of CSV text from any reader
pub fn describe_reader<R: Read>(
    reader: R,
    config: &InferenceConfig,
) -> Result<ColumnGuesses, InferenceError> {
    CsvImporter::new().describe_reader(reader, config)
}
