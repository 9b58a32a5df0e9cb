//! Scoring weights.

use crate::error::ConfigError;
use crate::preference::TimeWindow;
use chrono::NaiveTime;

/// Score delta of every preference rule, plus the red-eye window.
///
/// Rewards must be non-negative and penalties non-positive: the sign of a
/// contribution is what marks a rule as matched or violated.
///
/// # Examples
///
/// ```
/// use bidline::scoring::ScoringConfig;
///
/// let config = ScoringConfig::default()
///     .with_blocked_date(-1000.0)
///     .with_earnings_per_block_hour(3.0);
/// assert!(config.validate().is_ok());
/// assert!((config.preferred_route - 30.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// MaximizeEarnings: points per block hour.
    pub earnings_per_block_hour: f64,
    /// PreferRoute: route contains the configured run of airports.
    pub preferred_route: f64,
    /// PreferDepartureWindow: departure inside the window.
    pub departure_window: f64,
    /// MaxDuration: trip no longer than the limit.
    pub max_duration: f64,
    /// MaxLegsPerDay: average legs per day within the limit.
    pub max_legs_per_day: f64,
    /// AvoidRedEye: departure or arrival inside `red_eye_window`.
    pub red_eye: f64,
    /// AvoidAirport: route touches the airport.
    pub avoided_airport: f64,
    /// BlockWeekday: applied once per matching date in the trip.
    pub blocked_weekday_per_day: f64,
    /// BlockDateOff: trip touches the date.
    pub blocked_date: f64,
    /// Time-of-day range considered red-eye.
    pub red_eye_window: TimeWindow,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            earnings_per_block_hour: 2.0,
            preferred_route: 30.0,
            departure_window: 20.0,
            max_duration: 15.0,
            max_legs_per_day: 15.0,
            red_eye: -50.0,
            avoided_airport: -100.0,
            blocked_weekday_per_day: -40.0,
            blocked_date: -500.0,
            red_eye_window: TimeWindow::new(
                NaiveTime::MIN,
                NaiveTime::from_hms_opt(5, 0, 0).unwrap_or(NaiveTime::MIN),
            ),
        }
    }
}

impl ScoringConfig {
    pub fn with_earnings_per_block_hour(mut self, points: f64) -> Self {
        self.earnings_per_block_hour = points;
        self
    }

    pub fn with_preferred_route(mut self, points: f64) -> Self {
        self.preferred_route = points;
        self
    }

    pub fn with_departure_window(mut self, points: f64) -> Self {
        self.departure_window = points;
        self
    }

    pub fn with_max_duration(mut self, points: f64) -> Self {
        self.max_duration = points;
        self
    }

    pub fn with_max_legs_per_day(mut self, points: f64) -> Self {
        self.max_legs_per_day = points;
        self
    }

    pub fn with_red_eye(mut self, points: f64) -> Self {
        self.red_eye = points;
        self
    }

    pub fn with_avoided_airport(mut self, points: f64) -> Self {
        self.avoided_airport = points;
        self
    }

    pub fn with_blocked_weekday_per_day(mut self, points: f64) -> Self {
        self.blocked_weekday_per_day = points;
        self
    }

    pub fn with_blocked_date(mut self, points: f64) -> Self {
        self.blocked_date = points;
        self
    }

    pub fn with_red_eye_window(mut self, window: TimeWindow) -> Self {
        self.red_eye_window = window;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rewards = [
            ("earnings_per_block_hour", self.earnings_per_block_hour),
            ("preferred_route", self.preferred_route),
            ("departure_window", self.departure_window),
            ("max_duration", self.max_duration),
            ("max_legs_per_day", self.max_legs_per_day),
        ];
        let penalties = [
            ("red_eye", self.red_eye),
            ("avoided_airport", self.avoided_airport),
            ("blocked_weekday_per_day", self.blocked_weekday_per_day),
            ("blocked_date", self.blocked_date),
        ];

        for (name, value) in rewards.iter().chain(penalties.iter()) {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        for (name, value) in rewards {
            if value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} is a reward and must be >= 0, got {value}"
                )));
            }
        }
        for (name, value) in penalties {
            if value > 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} is a penalty and must be <= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}
