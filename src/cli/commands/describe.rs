//! The describe command: infer column types for each input file

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::error::CliError;
use crate::cli::output::{FileReport, render_reports};
use crate::import::CsvImporter;
use crate::inference::InferenceConfig;

/// Arguments for the describe command
#[derive(Debug, Clone)]
pub struct DescribeArgs {
    /// Files to describe, in order
    pub files: Vec<PathBuf>,
    /// Sampling style and seed
    pub config: InferenceConfig,
    /// Field delimiter
    pub delimiter: u8,
    /// Output document format
    pub format: OutputFormat,
}

impl TryFrom<&Cli> for DescribeArgs {
    type Error = CliError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            files: cli.files.clone(),
            config: cli.inference_config()?,
            delimiter: cli.delimiter_byte()?,
            format: cli.format,
        })
    }
}

/// What happened to each input
#[derive(Debug, Default)]
pub struct DescribeOutcome {
    /// Files described successfully
    pub described: Vec<PathBuf>,
    /// Paths that did not exist
    pub missing: Vec<PathBuf>,
    /// Files that existed but could not be read as CSV
    pub failed: Vec<(PathBuf, String)>,
}

impl DescribeOutcome {
    /// True when every input was described
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }
}

/// Handle the describe command
///
/// Missing and unreadable files are reported on `err` and skipped; the
/// remaining files are still described. The report document goes to
/// `out` and is omitted entirely when no file could be described.
pub fn handle_describe<O: Write, E: Write>(
    args: &DescribeArgs,
    out: &mut O,
    err: &mut E,
) -> Result<DescribeOutcome, CliError> {
    let mut outcome = DescribeOutcome::default();

    let (existing, missing): (Vec<&PathBuf>, Vec<&PathBuf>) =
        args.files.iter().partition(|p| p.exists());

    for path in missing {
        tracing::warn!(path = %path.display(), "Input file not found");
        writeln!(err, "No such file: {}", path.display())?;
        outcome.missing.push(path.clone());
    }

    let importer = CsvImporter::new().delimiter(args.delimiter);
    let mut reports = Vec::with_capacity(existing.len());

    for path in existing {
        tracing::info!(path = %path.display(), sampling = %args.config.sampling, "Describing file");
        match importer.describe_path(path, &args.config) {
            Ok(guesses) => {
                reports.push(FileReport::new(path, &guesses));
                outcome.described.push(path.clone());
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to describe file");
                writeln!(err, "{}: {}", path.display(), e)?;
                outcome.failed.push((path.clone(), e.to_string()));
            }
        }
    }

    if !reports.is_empty() {
        out.write_all(render_reports(&reports, args.format)?.as_bytes())?;
    }

    Ok(outcome)
}
