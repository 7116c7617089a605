//! Configuration for type inference

use serde::{Deserialize, Serialize};

use super::error::InferenceError;

/// Which records of a stream are examined during inference
///
/// Exactly one style is active per run. The checked constructors and
/// deserialization reject an out-of-range probability; a value built
/// directly from a variant is checked by [`validate`](Self::validate) when
/// an inferrer is created, before any record is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "style",
    rename_all = "camelCase",
    try_from = "UncheckedSamplingConfig"
)]
pub enum SamplingConfig {
    /// Examine only the first `n` records and stop reading
    FirstN { n: usize },
    /// Examine a uniformly random subset of `n` records
    Reservoir { n: usize },
    /// Examine each record independently with probability `p`
    ///
    /// The sample size varies from run to run; its expectation is
    /// `p * total`. A record is kept when its draw is `<= p`.
    RandomPercentage { p: f64 },
    /// Examine every record
    #[default]
    FullPopulation,
}

impl SamplingConfig {
    /// First-N sampling; negative sizes are rejected
    pub fn first_n(n: i64) -> Result<Self, InferenceError> {
        Ok(SamplingConfig::FirstN {
            n: checked_size(n)?,
        })
    }

    /// Reservoir sampling; negative sizes are rejected
    pub fn reservoir(n: i64) -> Result<Self, InferenceError> {
        Ok(SamplingConfig::Reservoir {
            n: checked_size(n)?,
        })
    }

    /// Random-percentage sampling with a probability in `[0, 1]`
    pub fn random_percentage(p: f64) -> Result<Self, InferenceError> {
        let config = SamplingConfig::RandomPercentage { p };
        config.validate()?;
        Ok(config)
    }

    /// Reject a probability outside `[0, 1]` (NaN included)
    pub fn validate(&self) -> Result<(), InferenceError> {
        match *self {
            SamplingConfig::RandomPercentage { p } if !(0.0..=1.0).contains(&p) => {
                Err(InferenceError::InvalidPercentage(p))
            }
            _ => Ok(()),
        }
    }

    /// Random-percentage sampling from a whole-number percentage (0-100)
    pub fn from_percent(percent: i64) -> Result<Self, InferenceError> {
        Self::random_percentage(percent as f64 / 100.0)
    }

    /// Short name of the sampling style
    pub fn style_name(&self) -> &'static str {
        match self {
            SamplingConfig::FirstN { .. } => "firstn",
            SamplingConfig::Reservoir { .. } => "reservoir",
            SamplingConfig::RandomPercentage { .. } => "percentage",
            SamplingConfig::FullPopulation => "population",
        }
    }

    /// Whether the sampling decision consumes random draws
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            SamplingConfig::Reservoir { .. } | SamplingConfig::RandomPercentage { .. }
        )
    }
}

impl std::fmt::Display for SamplingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplingConfig::FirstN { n } => write!(f, "FirstN(n={})", n),
            SamplingConfig::Reservoir { n } => write!(f, "Reservoir(n={})", n),
            SamplingConfig::RandomPercentage { p } => write!(f, "RandomPercentage(p={})", p),
            SamplingConfig::FullPopulation => write!(f, "FullPopulation"),
        }
    }
}

/// Wire form of [`SamplingConfig`] before validation
#[derive(Deserialize)]
#[serde(tag = "style", rename_all = "camelCase")]
enum UncheckedSamplingConfig {
    FirstN { n: usize },
    Reservoir { n: usize },
    RandomPercentage { p: f64 },
    FullPopulation,
}

impl TryFrom<UncheckedSamplingConfig> for SamplingConfig {
    type Error = InferenceError;

    fn try_from(raw: UncheckedSamplingConfig) -> Result<Self, Self::Error> {
        let config = match raw {
            UncheckedSamplingConfig::FirstN { n } => SamplingConfig::FirstN { n },
            UncheckedSamplingConfig::Reservoir { n } => SamplingConfig::Reservoir { n },
            UncheckedSamplingConfig::RandomPercentage { p } => {
                SamplingConfig::RandomPercentage { p }
            }
            UncheckedSamplingConfig::FullPopulation => SamplingConfig::FullPopulation,
        };
        config.validate()?;
        Ok(config)
    }
}

fn checked_size(n: i64) -> Result<usize, InferenceError> {
    usize::try_from(n).map_err(|_| InferenceError::InvalidSampleSize(n))
}

/// Configuration for a type inference run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Record sampling style
    pub sampling: SamplingConfig,

    /// Seed for the random source (random sampling styles only).
    /// Without a seed the engine draws one from the operating system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl InferenceConfig {
    /// Create a new configuration with defaults (full population, unseeded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the sampling style
    pub fn sampling(mut self, sampling: SamplingConfig) -> Self {
        self.config.sampling = sampling;
        self
    }

    /// Pin the random source to a seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.sampling, SamplingConfig::FullPopulation);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .sampling(SamplingConfig::reservoir(100).unwrap())
            .seed(42)
            .build();

        assert_eq!(config.sampling, SamplingConfig::Reservoir { n: 100 });
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_negative_sizes_rejected() {
        assert_eq!(
            SamplingConfig::first_n(-1),
            Err(InferenceError::InvalidSampleSize(-1))
        );
        assert_eq!(
            SamplingConfig::reservoir(-10),
            Err(InferenceError::InvalidSampleSize(-10))
        );
        assert_eq!(
            SamplingConfig::first_n(0),
            Ok(SamplingConfig::FirstN { n: 0 })
        );
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(SamplingConfig::random_percentage(0.0).is_ok());
        assert!(SamplingConfig::random_percentage(1.0).is_ok());
        assert_eq!(
            SamplingConfig::random_percentage(1.01),
            Err(InferenceError::InvalidPercentage(1.01))
        );
        assert!(SamplingConfig::random_percentage(-0.1).is_err());
        assert!(SamplingConfig::random_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_from_percent() {
        assert_eq!(
            SamplingConfig::from_percent(25),
            Ok(SamplingConfig::RandomPercentage { p: 0.25 })
        );
        assert!(SamplingConfig::from_percent(101).is_err());
        assert!(SamplingConfig::from_percent(-5).is_err());
    }

    #[test]
    fn test_validate_direct_variants() {
        assert!(SamplingConfig::RandomPercentage { p: 0.5 }.validate().is_ok());
        assert_eq!(
            SamplingConfig::RandomPercentage { p: 5.0 }.validate(),
            Err(InferenceError::InvalidPercentage(5.0))
        );
        assert!(matches!(
            SamplingConfig::RandomPercentage { p: f64::NAN }.validate(),
            Err(InferenceError::InvalidPercentage(p)) if p.is_nan()
        ));
        assert!(SamplingConfig::Reservoir { n: 0 }.validate().is_ok());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_percentage() {
        let result: Result<SamplingConfig, _> =
            serde_json::from_str(r#"{"style":"randomPercentage","p":5.0}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid sampling probability: 5"));

        let ok: SamplingConfig =
            serde_json::from_str(r#"{"style":"randomPercentage","p":0.25}"#).unwrap();
        assert_eq!(ok, SamplingConfig::RandomPercentage { p: 0.25 });

        let config: Result<InferenceConfig, _> =
            serde_json::from_str(r#"{"sampling":{"style":"randomPercentage","p":-1.0}}"#);
        assert!(config.is_err());
    }

    #[test]
    fn test_style_names() {
        assert_eq!(SamplingConfig::FirstN { n: 1 }.style_name(), "firstn");
        assert_eq!(SamplingConfig::FullPopulation.style_name(), "population");
        assert!(SamplingConfig::Reservoir { n: 1 }.is_random());
        assert!(!SamplingConfig::FirstN { n: 1 }.is_random());
    }

    #[test]
    fn test_serde_roundtrip_shape() {
        let json = serde_json::to_value(SamplingConfig::FirstN { n: 5 }).unwrap();
        assert_eq!(json, serde_json::json!({"style": "firstN", "n": 5}));
    }
}
