//! Pairing record and bid month.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};
use std::fmt;

/// One flight trip instance offered in the bid month.
///
/// Timestamps are local trip-clock values; no timezone conversion is
/// applied anywhere in the crate.
///
/// # Examples
///
/// ```
/// use bidline::catalog::Pairing;
/// use chrono::NaiveDate;
///
/// let dep = NaiveDate::from_ymd_opt(2025, 10, 14).unwrap().and_hms_opt(6, 30, 0).unwrap();
/// let arr = NaiveDate::from_ymd_opt(2025, 10, 16).unwrap().and_hms_opt(18, 0, 0).unwrap();
///
/// let p = Pairing::new("P100", dep, arr)
///     .with_route_str("JFK - MIA - JFK")
///     .with_block_hours(14.5);
///
/// assert_eq!(p.duration_days, 3);
/// assert_eq!(p.route, vec!["JFK", "MIA", "JFK"]);
/// assert_eq!(p.legs(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Pairing {
    /// Identifier, unique within a catalog.
    pub id: String,
    /// Aircraft short code.
    pub aircraft_type: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    /// Calendar days touched by the trip, at least 1.
    pub duration_days: u32,
    /// Scheduled flight time in decimal hours.
    pub block_hours: f64,
    /// Ordered airport codes, upper case.
    pub route: Vec<String>,
    /// Pre-assigned trips are never selected by the generator but still
    /// occupy their dates.
    pub pre_assigned: bool,
}

impl Pairing {
    /// Creates a pairing with the duration derived from the calendar dates.
    pub fn new(id: impl Into<String>, departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            aircraft_type: String::new(),
            departure,
            arrival,
            duration_days: calendar_span(departure.date(), arrival.date()),
            block_hours: 0.0,
            route: Vec::new(),
            pre_assigned: false,
        }
    }

    pub fn with_aircraft(mut self, code: impl Into<String>) -> Self {
        self.aircraft_type = code.into();
        self
    }

    pub fn with_block_hours(mut self, hours: f64) -> Self {
        self.block_hours = hours;
        self
    }

    /// Sets the route from individual airport codes.
    pub fn with_route<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.route = codes
            .into_iter()
            .map(|c| c.as_ref().trim().to_ascii_uppercase())
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    /// Sets the route from its textual form, e.g. `"JFK - MIA - JFK"`.
    pub fn with_route_str(self, route: &str) -> Self {
        self.with_route(parse_route(route))
    }

    /// Overrides the derived duration with an explicitly supplied one.
    pub fn with_duration_days(mut self, days: u32) -> Self {
        self.duration_days = days;
        self
    }

    pub fn pre_assigned(mut self) -> Self {
        self.pre_assigned = true;
        self
    }

    /// Every calendar date from departure to arrival, inclusive.
    pub fn span_dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.arrival.date();
        self.departure
            .date()
            .iter_days()
            .take_while(move |d| *d <= end)
    }

    /// Whether `date` lies within the trip's calendar span.
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        self.departure.date() <= date && date <= self.arrival.date()
    }

    /// Number of calendar dates in the span falling on `weekday`.
    pub fn weekday_count(&self, weekday: Weekday) -> usize {
        self.span_dates().filter(|d| d.weekday() == weekday).count()
    }

    /// Number of Saturdays and Sundays in the span.
    pub fn weekend_days(&self) -> usize {
        self.span_dates().filter(|d| is_weekend(*d)).count()
    }

    /// Flight legs implied by the route.
    pub fn legs(&self) -> usize {
        self.route.len().saturating_sub(1)
    }

    pub fn legs_per_day(&self) -> f64 {
        self.legs() as f64 / self.duration_days.max(1) as f64
    }

    /// Whether any stop of the route is `airport` (case-insensitive).
    pub fn visits(&self, airport: &str) -> bool {
        self.route.iter().any(|c| c.eq_ignore_ascii_case(airport))
    }

    /// Whether `codes` appears as a contiguous run of the route.
    pub fn contains_sequence(&self, codes: &[String]) -> bool {
        if codes.is_empty() || codes.len() > self.route.len() {
            return false;
        }
        self.route.windows(codes.len()).any(|w| {
            w.iter()
                .zip(codes)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
        })
    }

    /// Whether the two duty intervals intersect.
    pub fn overlaps(&self, other: &Pairing) -> bool {
        self.departure < other.arrival && other.departure < self.arrival
    }
}

/// Splits a route string such as `"AAA - BBB - AAA"` into upper-case codes.
pub fn parse_route(route: &str) -> Vec<String> {
    route
        .split('-')
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn calendar_span(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    days.max(1) as u32
}

/// The calendar month a bid covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidMonth {
    first: NaiveDate,
}

impl BidMonth {
    /// Returns `None` for an invalid month number.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Number of calendar days in the month.
    pub fn num_days(&self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .map(|next| (next - self.first).num_days() as u32)
            .unwrap_or(31)
    }

    /// Iterates every date of the month.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.first.month();
        self.first.iter_days().take_while(move |d| d.month() == month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.first.year() && date.month() == self.first.month()
    }
}

impl fmt::Display for BidMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}
