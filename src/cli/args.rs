//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use super::error::CliError;
use crate::inference::{InferenceConfig, SamplingConfig};

/// Summarize field types and values observed in (a sample of) a CSV file.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "csvdesc")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub sampling: SamplingArgs,

    /// Number or percentage (as whole number) of records to sample
    #[arg(long = "samplesize", value_name = "N", default_value_t = 1000, allow_negative_numbers = true)]
    pub sample_size: i64,

    /// Logging level (falls back to RUST_LOG, then warning)
    #[arg(long, value_enum)]
    pub loglevel: Option<LogLevel>,

    /// Seed for random sampling styles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output document format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Files to describe
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Mutually exclusive sampling styles; none selected means every record
#[derive(Args, Debug, Clone, Default, PartialEq)]
#[group(required = false, multiple = false)]
pub struct SamplingArgs {
    /// Examine only the first N records (most efficient)
    #[arg(long)]
    pub firstn: bool,

    /// Examine a random N records (fixed sample size)
    #[arg(long)]
    pub reservoir: bool,

    /// Examine a random, approximate percentage of records (variable sample size)
    #[arg(long)]
    pub percentage: bool,
}

/// Logging levels accepted by `--loglevel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Equivalent `tracing` filter directive
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info | LogLevel::Notice => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

/// Output document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl Cli {
    /// Sampling style selected by the flags and `--samplesize`
    pub fn sampling_config(&self) -> Result<SamplingConfig, CliError> {
        let SamplingArgs {
            firstn,
            reservoir,
            percentage,
        } = self.sampling;

        let config = if firstn {
            SamplingConfig::first_n(self.sample_size)?
        } else if reservoir {
            SamplingConfig::reservoir(self.sample_size)?
        } else if percentage {
            SamplingConfig::from_percent(self.sample_size)?
        } else {
            SamplingConfig::FullPopulation
        };
        Ok(config)
    }

    /// Full inference configuration
    pub fn inference_config(&self) -> Result<InferenceConfig, CliError> {
        let mut builder = InferenceConfig::builder().sampling(self.sampling_config()?);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        Ok(builder.build())
    }

    /// Delimiter as a byte
    pub fn delimiter_byte(&self) -> Result<u8, CliError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                CliError::Config(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    self.delimiter
                ))
            })
    }
}

/// Parse arguments from an iterator (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
