//! Schedule generator configuration.

use super::types::Strategy;
use crate::error::ConfigError;
use std::collections::HashSet;
use std::time::Duration;

/// Configuration for the schedule generator.
///
/// # Examples
///
/// ```
/// use bidline::generator::{GeneratorConfig, Strategy};
///
/// let config = GeneratorConfig::default()
///     .with_strategies([Strategy::EarningsMax])
///     .with_time_limit_ms(2_000)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Strategies to build, in output order.
    pub strategies: Vec<Strategy>,

    /// Whether to build strategies concurrently using rayon.
    ///
    /// Has no effect without the `parallel` feature. Output is identical
    /// either way.
    pub parallel: bool,

    /// Wall-clock bound for a whole run in milliseconds. `None` = no limit.
    pub time_limit_ms: Option<u64>,

    /// Trip-length limit LifestyleComfort ranks by when the user has no
    /// MaxDuration preference. `None` adds nothing.
    pub lifestyle_max_duration: Option<u32>,

    /// Candidates scoring below this under the full preference set are
    /// dropped before selection. `None` keeps all.
    pub min_candidate_score: Option<f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            parallel: true,
            time_limit_ms: None,
            lifestyle_max_duration: Some(3),
            min_candidate_score: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_strategies<I: IntoIterator<Item = Strategy>>(mut self, strategies: I) -> Self {
        self.strategies = strategies.into_iter().collect();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_lifestyle_max_duration(mut self, days: Option<u32>) -> Self {
        self.lifestyle_max_duration = days;
        self
    }

    pub fn with_min_candidate_score(mut self, score: f64) -> Self {
        self.min_candidate_score = Some(score);
        self
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategies.is_empty() {
            return Err(ConfigError::Invalid("at least one strategy is required".into()));
        }
        let mut seen = HashSet::new();
        for s in &self.strategies {
            if !seen.insert(s) {
                return Err(ConfigError::Invalid(format!("strategy {s} listed twice")));
            }
        }
        if self.lifestyle_max_duration == Some(0) {
            return Err(ConfigError::Invalid(
                "lifestyle_max_duration must be at least 1 day".into(),
            ));
        }
        if let Some(score) = self.min_candidate_score {
            if !score.is_finite() {
                return Err(ConfigError::Invalid("min_candidate_score must be finite".into()));
            }
        }
        Ok(())
    }
}
