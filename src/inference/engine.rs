//! Type inference engine

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::accumulator::ColumnAccumulator;
use super::config::{InferenceConfig, SamplingConfig};
use super::error::InferenceError;
use super::sampling::sample;
use super::types::{ColumnGuesses, Record};

/// Statistics from the last inference run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Records pulled from the source
    pub records_read: usize,
    /// Records that passed the sampler
    pub records_sampled: usize,
    /// Distinct columns seen in sampled records
    pub columns_discovered: usize,
}

/// Infers a type per column from a stream of records
///
/// The stream is consumed once. Columns are discovered as they appear;
/// a column never holding a value in a sampled record is absent from
/// the result.
pub struct TypeInferrer<R = StdRng> {
    config: InferenceConfig,
    rng: R,
    stats: InferenceStats,
}

impl TypeInferrer<StdRng> {
    /// Create an inferrer over the full population
    pub fn new() -> Self {
        Self {
            config: InferenceConfig::default(),
            rng: StdRng::from_os_rng(),
            stats: InferenceStats::default(),
        }
    }

    /// Create an inferrer with custom configuration
    ///
    /// The random source is seeded from `config.seed` when present. An
    /// invalid sampling configuration is rejected here, before any record
    /// is read.
    pub fn with_config(config: InferenceConfig) -> Result<Self, InferenceError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for TypeInferrer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TypeInferrer<R> {
    /// Create an inferrer drawing from a caller-supplied random source
    pub fn with_rng(config: InferenceConfig, rng: R) -> Result<Self, InferenceError> {
        config.sampling.validate()?;
        Ok(Self {
            config,
            rng,
            stats: InferenceStats::default(),
        })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Sample `records`, accumulate every present value, and reduce each
    /// column to a type guess
    pub fn infer<I>(&mut self, records: I) -> ColumnGuesses
    where
        I: IntoIterator<Item = Record>,
    {
        let sampling = self.config.sampling;
        tracing::debug!(
            sampling = %sampling,
            random = sampling.is_random(),
            "Starting type inference"
        );

        let mut records_read = 0usize;
        let mut records_sampled = 0usize;
        let mut order: Vec<String> = Vec::new();
        let mut accumulators: HashMap<String, ColumnAccumulator> = HashMap::new();

        let source = records.into_iter().inspect(|_| records_read += 1);
        for record in sample(source, &sampling, &mut self.rng) {
            records_sampled += 1;
            for (column, value) in record.iter() {
                let Some(value) = value else {
                    continue;
                };
                match accumulators.get_mut(column) {
                    Some(acc) => acc.update(value),
                    None => {
                        let mut acc = ColumnAccumulator::new();
                        acc.update(value);
                        accumulators.insert(column.to_string(), acc);
                        order.push(column.to_string());
                    }
                }
            }
        }

        self.stats = InferenceStats {
            records_read,
            records_sampled,
            columns_discovered: order.len(),
        };
        tracing::debug!(
            records_read,
            records_sampled,
            columns = order.len(),
            "Type inference complete"
        );

        let columns = order
            .into_iter()
            .filter_map(|name| {
                let guess = accumulators.get(&name)?.reduce();
                Some((name, guess))
            })
            .collect();
        ColumnGuesses::from_columns(columns)
    }

    /// Statistics from the most recent [`infer`](Self::infer) call
    pub fn stats(&self) -> InferenceStats {
        self.stats
    }
}

/// Infer column types from `records` using `sampling`
///
/// Random sampling styles draw from an OS-seeded source; use
/// [`TypeInferrer::with_config`] with a seed for reproducible runs.
pub fn infer<I>(records: I, sampling: SamplingConfig) -> Result<ColumnGuesses, InferenceError>
where
    I: IntoIterator<Item = Record>,
{
    let config = InferenceConfig::builder().sampling(sampling).build();
    Ok(TypeInferrer::with_config(config)?.infer(records))
}
