//! Output formatting for CLI

use std::path::Path;

use serde::Serialize;

use super::args::OutputFormat;
use super::error::CliError;
use crate::inference::{ColumnGuesses, TypeTag};

/// Guessed types for one described file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub types: Vec<FieldReport>,
}

/// One column's guess as shown to users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: TypeTag,
    pub observations: usize,
}

impl FileReport {
    /// Build a report from the guesses for `path`
    pub fn new(path: &Path, guesses: &ColumnGuesses) -> Self {
        Self {
            path: path.display().to_string(),
            types: guesses
                .iter()
                .map(|(field, guess)| FieldReport {
                    field: field.to_string(),
                    field_type: guess.guessed_type(),
                    observations: guess.observations(),
                })
                .collect(),
        }
    }
}

/// Render reports as a YAML or JSON document
pub fn render_reports(reports: &[FileReport], format: OutputFormat) -> Result<String, CliError> {
    let output = match format {
        OutputFormat::Yaml => serde_yaml::to_string(reports)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(reports)?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}
