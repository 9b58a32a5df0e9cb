//! Engine-wide configuration.
//!
//! Bundles the scoring weights, the hard constraint limits and the
//! generator settings so they can be overridden without code changes.
//!
//! With the `toml` feature the whole bundle loads from a file; every
//! omitted field keeps its default:
//!
//! ```
//! # #[cfg(feature = "toml")]
//! # {
//! use bidline::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [scoring]
//!     blocked_date = -800.0
//!
//!     [limits]
//!     max_block_hours = 85.0
//!
//!     [generator]
//!     strategies = ["EarningsMax", "WeekendsFree"]
//!     time_limit_ms = 5000
//! "#).unwrap();
//!
//! assert!((config.scoring.blocked_date + 800.0).abs() < 1e-10);
//! assert!((config.scoring.preferred_route - 30.0).abs() < 1e-10);
//! assert!((config.limits.min_rest_hours - 10.0).abs() < 1e-10);
//! assert_eq!(config.generator.strategies.len(), 2);
//! # }
//! ```

use crate::constraints::ConstraintLimits;
use crate::error::ConfigError;
use crate::generator::GeneratorConfig;
use crate::scoring::ScoringConfig;

#[cfg(feature = "toml")]
use std::path::Path;

/// Complete configuration for scoring and schedule generation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub limits: ConstraintLimits,
    pub generator: GeneratorConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_limits(mut self, limits: ConstraintLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.limits.validate()?;
        self.generator.validate()
    }

    /// Loads and validates configuration from a TOML file.
    #[cfg(feature = "toml")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads and validates configuration from a TOML file.
    #[cfg(feature = "toml")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_section_reported() {
        let config = EngineConfig::new()
            .with_limits(ConstraintLimits::default().with_max_block_hours(-5.0));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_block_hours"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_partial_override() {
        let config = EngineConfig::from_toml_str(
            r#"
            [limits]
            min_rest_hours = 12.0

            [scoring.red_eye_window]
            start = "23:00:00"
            end = "06:00:00"
            "#,
        )
        .unwrap();
        assert!((config.limits.min_rest_hours - 12.0).abs() < 1e-10);
        assert!((config.limits.max_block_hours - 88.0).abs() < 1e-10);
        assert_eq!(config.scoring.red_eye_window.to_string(), "23:00-06:00");
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_rejects_invalid_values() {
        let result = EngineConfig::from_toml_str(
            r#"
            [scoring]
            avoided_airport = 50.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_syntax_error() {
        let result = EngineConfig::from_toml_str("[limits\nmax_block_hours = 1");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_missing_file() {
        let result = EngineConfig::load("/nonexistent/bidline.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
