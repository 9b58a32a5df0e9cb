//! Strategies and generated schedules.

use crate::catalog::Pairing;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

/// Objective a generated schedule optimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Most block hours within the monthly cap.
    EarningsMax,
    /// Shortest trips first, then the best comfort score.
    LifestyleComfort,
    /// Trips that leave the most weekend days free first.
    WeekendsFree,
}

impl Strategy {
    /// All strategies in presentation order.
    pub const ALL: [Strategy; 3] = [
        Strategy::EarningsMax,
        Strategy::LifestyleComfort,
        Strategy::WeekendsFree,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::EarningsMax => "EarningsMax",
            Strategy::LifestyleComfort => "LifestyleComfort",
            Strategy::WeekendsFree => "WeekendsFree",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::EarningsMax => "Plan A: Max Earnings",
            Strategy::LifestyleComfort => "Plan B: Lifestyle & Comfort",
            Strategy::WeekendsFree => "Plan C: Weekends Free",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::EarningsMax => "Prioritizes high block-hour trips to maximize pay",
            Strategy::LifestyleComfort => "Prioritizes shorter trips and user preferences",
            Strategy::WeekendsFree => "Attempts to keep Saturdays and Sundays free",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A monthly line built for one strategy.
///
/// Recomputed from scratch on every generation run and never modified
/// afterwards. Pre-assigned trips are not listed but do reduce `days_off`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    pub strategy: Strategy,
    /// Selected trips in chronological order.
    pub pairings: Vec<Pairing>,
    /// Block hours of the selected trips.
    pub total_block_hours: f64,
    /// Days of the bid month touched by neither selected nor pre-assigned trips.
    pub days_off: u32,
}

impl Schedule {
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn pairing_ids(&self) -> Vec<&str> {
        self.pairings.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn trip_count(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Calendar dates spanned by the selected trips, any month.
    pub fn covered_dates(&self) -> BTreeSet<NaiveDate> {
        self.pairings.iter().flat_map(|p| p.span_dates()).collect()
    }
}

/// Why a strategy run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every candidate was considered.
    Exhausted,
    /// The cancellation flag was raised.
    Cancelled,
    /// The configured time limit elapsed.
    TimedOut,
}

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// One schedule per configured strategy, in configuration order.
    pub schedules: Vec<Schedule>,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Whether the time limit cut the run short.
    pub timed_out: bool,

    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl GenerationResult {
    pub fn schedule(&self, strategy: Strategy) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.strategy == strategy)
    }

    /// Whether every strategy considered its full candidate list.
    pub fn is_complete(&self) -> bool {
        !self.cancelled && !self.timed_out
    }
}
