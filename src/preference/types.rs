//! Preference rule variants.

use crate::catalog::parse_route;
use chrono::{NaiveDate, NaiveTime, Timelike, Weekday};
use std::fmt;

/// A time-of-day window, inclusive at both ends.
///
/// When `start > end` the window wraps past midnight (e.g. 22:00–04:00).
///
/// ```
/// use bidline::preference::TimeWindow;
/// use chrono::NaiveTime;
///
/// let w = TimeWindow::from_hours(22, 4).unwrap();
/// assert!(w.contains(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
/// assert!(w.contains(NaiveTime::from_hms_opt(4, 15, 0).unwrap()));
/// assert!(!w.contains(NaiveTime::from_hms_opt(5, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Window covering whole clock hours `start_hour..=end_hour`.
    ///
    /// Any time within the final hour counts, so `from_hours(6, 12)`
    /// accepts 12:45. Returns `None` for hours above 23.
    pub fn from_hours(start_hour: u32, end_hour: u32) -> Option<Self> {
        Some(Self {
            start: NaiveTime::from_hms_opt(start_hour, 0, 0)?,
            end: NaiveTime::from_hms_opt(end_hour, 59, 59)?,
        })
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= time && time <= self.end
        } else {
            time >= self.start || time <= self.end
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute()
        )
    }
}

/// One user-defined scoring rule.
///
/// Each variant carries only the parameters its rule needs. Rules are
/// applied independently and summed, so the order of a
/// [`PreferenceSet`](super::PreferenceSet) never affects a score.
///
/// Decoding an unknown `kind` yields [`Preference::Unrecognized`], which
/// scores zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Preference {
    /// Keep a calendar date free.
    BlockDateOff {
        date: NaiveDate,
        /// When set the generator never selects a trip touching `date`;
        /// otherwise the date only costs score.
        #[cfg_attr(feature = "serde", serde(default = "block_completely_default"))]
        block_completely: bool,
    },

    /// Keep a weekday free; penalised once per matching date.
    BlockWeekday { weekday: Weekday },

    /// Prefer trips no longer than `max_days`.
    MaxDuration { max_days: u32 },

    /// Avoid departures or arrivals inside the configured red-eye window.
    AvoidRedEye,

    /// Prefer trips averaging at most `max_legs` legs per day.
    MaxLegsPerDay { max_legs: u32 },

    /// Reward block hours.
    MaximizeEarnings,

    /// Prefer trips whose route contains this run of airport codes.
    PreferRoute { route: Vec<String> },

    /// Prefer departures inside the window.
    PreferDepartureWindow { window: TimeWindow },

    /// Avoid trips touching the airport.
    AvoidAirport { airport: String },

    /// A rule kind this version does not know.
    #[cfg_attr(feature = "serde", serde(other))]
    Unrecognized,
}

#[cfg(feature = "serde")]
fn block_completely_default() -> bool {
    true
}

impl Preference {
    /// A date the generator must keep free.
    pub fn block_date_off(date: NaiveDate) -> Self {
        Preference::BlockDateOff {
            date,
            block_completely: true,
        }
    }

    /// A date that only costs score when worked.
    pub fn soft_date_off(date: NaiveDate) -> Self {
        Preference::BlockDateOff {
            date,
            block_completely: false,
        }
    }

    pub fn block_weekday(weekday: Weekday) -> Self {
        Preference::BlockWeekday { weekday }
    }

    pub fn max_duration(max_days: u32) -> Self {
        Preference::MaxDuration { max_days }
    }

    pub fn max_legs_per_day(max_legs: u32) -> Self {
        Preference::MaxLegsPerDay { max_legs }
    }

    /// Accepts a single code (`"MIA"`) or a run (`"JFK - MIA"`).
    pub fn prefer_route(route: &str) -> Self {
        Preference::PreferRoute {
            route: parse_route(route),
        }
    }

    pub fn prefer_departure_window(window: TimeWindow) -> Self {
        Preference::PreferDepartureWindow { window }
    }

    pub fn avoid_airport(airport: &str) -> Self {
        Preference::AvoidAirport {
            airport: airport.trim().to_ascii_uppercase(),
        }
    }

    pub fn kind(&self) -> PreferenceKind {
        match self {
            Preference::BlockDateOff { .. } => PreferenceKind::BlockDateOff,
            Preference::BlockWeekday { .. } => PreferenceKind::BlockWeekday,
            Preference::MaxDuration { .. } => PreferenceKind::MaxDuration,
            Preference::AvoidRedEye => PreferenceKind::AvoidRedEye,
            Preference::MaxLegsPerDay { .. } => PreferenceKind::MaxLegsPerDay,
            Preference::MaximizeEarnings => PreferenceKind::MaximizeEarnings,
            Preference::PreferRoute { .. } => PreferenceKind::PreferRoute,
            Preference::PreferDepartureWindow { .. } => PreferenceKind::PreferDepartureWindow,
            Preference::AvoidAirport { .. } => PreferenceKind::AvoidAirport,
            Preference::Unrecognized => PreferenceKind::Unrecognized,
        }
    }

    /// The date this rule keeps free unconditionally, if any.
    pub fn hard_blocked_date(&self) -> Option<NaiveDate> {
        match self {
            Preference::BlockDateOff {
                date,
                block_completely: true,
            } => Some(*date),
            _ => None,
        }
    }
}

/// Discriminant of [`Preference`], used in score breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreferenceKind {
    BlockDateOff,
    BlockWeekday,
    MaxDuration,
    AvoidRedEye,
    MaxLegsPerDay,
    MaximizeEarnings,
    PreferRoute,
    PreferDepartureWindow,
    AvoidAirport,
    Unrecognized,
}

impl PreferenceKind {
    pub fn name(&self) -> &'static str {
        match self {
            PreferenceKind::BlockDateOff => "BlockDateOff",
            PreferenceKind::BlockWeekday => "BlockWeekday",
            PreferenceKind::MaxDuration => "MaxDuration",
            PreferenceKind::AvoidRedEye => "AvoidRedEye",
            PreferenceKind::MaxLegsPerDay => "MaxLegsPerDay",
            PreferenceKind::MaximizeEarnings => "MaximizeEarnings",
            PreferenceKind::PreferRoute => "PreferRoute",
            PreferenceKind::PreferDepartureWindow => "PreferDepartureWindow",
            PreferenceKind::AvoidAirport => "AvoidAirport",
            PreferenceKind::Unrecognized => "Unrecognized",
        }
    }

    /// Whether the rule is about quality of life rather than pay.
    ///
    /// Everything except [`PreferenceKind::MaximizeEarnings`] qualifies.
    pub fn is_comfort(&self) -> bool {
        !matches!(
            self,
            PreferenceKind::MaximizeEarnings | PreferenceKind::Unrecognized
        )
    }
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
