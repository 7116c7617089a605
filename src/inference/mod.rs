//! Column type inference for delimited records
//!
//! This module guesses the most specific common type of every column in a
//! stream of records, optionally looking at only a sample of them.
//!
//! ## Features
//!
//! - **Value classification** - Each raw value is tested for integer,
//!   decimal, boolean and non-empty string compatibility
//! - **Sampling** - First-N, reservoir, random percentage, or the full population
//! - **Evidence** - Every guess carries its observation count, per-type
//!   compatibility counts and value frequencies
//!
//! ## Example
//!
//! ```rust
//! use csv_describe::inference::{Record, SamplingConfig, TypeTag, infer};
//!
//! let records: Vec<Record> = ["1", "2", "3"]
//!     .into_iter()
//!     .map(|v| [("id", v)].into_iter().collect())
//!     .collect();
//!
//! let guesses = infer(records, SamplingConfig::FullPopulation).unwrap();
//! let id = guesses.get("id").unwrap();
//! assert_eq!(id.guessed_type(), TypeTag::Integer);
//! assert_eq!(id.observations(), 3);
//! ```

mod accumulator;
mod classify;
mod config;
mod engine;
mod error;
mod sampling;
mod types;

pub use accumulator::ColumnAccumulator;
pub use classify::{BOOLEAN_STRINGS, classify, is_boolean, is_decimal, is_integer};
pub use config::{InferenceConfig, InferenceConfigBuilder, SamplingConfig};
pub use engine::{InferenceStats, TypeInferrer, infer};
pub use error::InferenceError;
pub use sampling::{PercentageSample, Sampled, first_n, reservoir_sample, sample};
pub use types::{ColumnGuesses, Record, TypeCounts, TypeGuess, TypeSet, TypeTag};
