//! Hard constraint limits.

use crate::error::ConfigError;
use chrono::Duration;

/// Upper bound for both limits: the hours in a 31-day month.
pub const MAX_LIMIT_HOURS: f64 = 31.0 * 24.0;

/// Limits every generated schedule must respect.
///
/// ```
/// use bidline::constraints::ConstraintLimits;
///
/// let limits = ConstraintLimits::default().with_min_rest_hours(12.0);
/// assert!((limits.max_block_hours - 88.0).abs() < 1e-10);
/// assert_eq!(limits.min_rest().num_hours(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConstraintLimits {
    /// Monthly block-hour cap over the selected trips.
    pub max_block_hours: f64,
    /// Minimum off-duty gap between consecutive trips, in hours.
    pub min_rest_hours: f64,
}

impl Default for ConstraintLimits {
    fn default() -> Self {
        Self {
            max_block_hours: 88.0,
            min_rest_hours: 10.0,
        }
    }
}

impl ConstraintLimits {
    pub fn with_max_block_hours(mut self, hours: f64) -> Self {
        self.max_block_hours = hours;
        self
    }

    pub fn with_min_rest_hours(mut self, hours: f64) -> Self {
        self.min_rest_hours = hours;
        self
    }

    /// Minimum rest as a duration, rounded to the second.
    ///
    /// Out-of-range values saturate instead of panicking: NaN maps to zero,
    /// anything beyond chrono's range to [`Duration::MAX`].
    pub fn min_rest(&self) -> Duration {
        // `as` saturates on overflow and maps NaN to 0
        let seconds = (self.min_rest_hours * 3600.0).round() as i64;
        Duration::try_seconds(seconds).unwrap_or(Duration::MAX)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("max_block_hours", self.max_block_hours),
            ("min_rest_hours", self.min_rest_hours),
        ];
        for (name, hours) in limits {
            if !(0.0..=MAX_LIMIT_HOURS).contains(&hours) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 0 and {MAX_LIMIT_HOURS} hours, got {hours}"
                )));
            }
        }
        Ok(())
    }
}
