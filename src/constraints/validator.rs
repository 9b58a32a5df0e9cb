//! Feasibility predicates over a partially built line.

use super::config::ConstraintLimits;
use crate::catalog::Pairing;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use std::fmt;

/// A fixed duty period on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DutyInterval {
    pub fn of(pairing: &Pairing) -> Self {
        Self {
            start: pairing.departure,
            end: pairing.arrival,
        }
    }

    /// Open-interval intersection: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &DutyInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The line under construction: trips selected so far plus pre-assigned
/// trips, which block time but never count toward the block-hour cap.
///
/// Duties are kept sorted by start so neighbour lookups are a binary search.
#[derive(Debug, Clone, Default)]
pub struct DutyRoster<'a> {
    selected: Vec<&'a Pairing>,
    duties: Vec<DutyInterval>,
    total_block_hours: f64,
}

impl<'a> DutyRoster<'a> {
    /// Starts a roster holding only the pre-assigned trips.
    pub fn new<I>(pre_assigned: I) -> Self
    where
        I: IntoIterator<Item = &'a Pairing>,
    {
        let mut roster = Self::default();
        for p in pre_assigned {
            roster.insert_duty(DutyInterval::of(p));
        }
        roster
    }

    /// Adds a selected trip. Feasibility is the caller's concern.
    pub fn push(&mut self, pairing: &'a Pairing) {
        self.insert_duty(DutyInterval::of(pairing));
        self.total_block_hours += pairing.block_hours;
        self.selected.push(pairing);
    }

    fn insert_duty(&mut self, duty: DutyInterval) {
        let pos = self.duties.partition_point(|d| d.start <= duty.start);
        self.duties.insert(pos, duty);
    }

    /// Selected trips in acceptance order.
    pub fn selected(&self) -> &[&'a Pairing] {
        &self.selected
    }

    /// Every duty on the line, selected and pre-assigned, by start time.
    pub fn duties(&self) -> &[DutyInterval] {
        &self.duties
    }

    /// Block hours of the selected trips.
    pub fn total_block_hours(&self) -> f64 {
        self.total_block_hours
    }

    /// Chronological neighbours of `duty`: the latest-ending duty starting
    /// no later than it, and the earliest duty starting after it.
    fn neighbours(&self, duty: &DutyInterval) -> (Option<&DutyInterval>, Option<&DutyInterval>) {
        let idx = self.duties.partition_point(|d| d.start <= duty.start);
        let previous = self.duties[..idx].iter().max_by_key(|d| d.end);
        (previous, self.duties.get(idx))
    }
}

/// Which hard constraint a candidate breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    BlockedDate,
    Overlap,
    InsufficientRest,
    BlockCap,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Violation::BlockedDate => "blocked date",
            Violation::Overlap => "overlap",
            Violation::InsufficientRest => "insufficient rest",
            Violation::BlockCap => "block-hour cap",
        };
        f.write_str(s)
    }
}

/// Stateless constraint checks.
///
/// Predicates only answer yes or no; interval sanity (arrival after
/// departure) is enforced when the catalog is built.
///
/// # Examples
///
/// ```
/// use bidline::catalog::Pairing;
/// use bidline::constraints::{ConstraintLimits, ConstraintValidator, DutyRoster};
/// use chrono::NaiveDate;
///
/// let at = |d, h| NaiveDate::from_ymd_opt(2025, 10, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let first = Pairing::new("A", at(1, 8), at(2, 18)).with_route_str("JFK-MIA-JFK").with_block_hours(10.0);
/// let tight = Pairing::new("B", at(3, 2), at(3, 20)).with_route_str("JFK-BOS-JFK").with_block_hours(6.0);
///
/// let limits = ConstraintLimits::default();
/// let validator = ConstraintValidator::new(&limits);
/// let mut roster = DutyRoster::default();
/// roster.push(&first);
///
/// assert!(validator.no_overlap(&roster, &tight));
/// assert!(!validator.has_minimum_rest(&roster, &tight)); // only 8 h off
/// assert!(validator.fits_block_cap(&roster, &tight));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstraintValidator<'a> {
    limits: &'a ConstraintLimits,
}

impl<'a> ConstraintValidator<'a> {
    pub fn new(limits: &'a ConstraintLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ConstraintLimits {
        self.limits
    }

    /// Selected block hours plus the candidate stay within the monthly cap.
    pub fn fits_block_cap(&self, roster: &DutyRoster<'_>, candidate: &Pairing) -> bool {
        roster.total_block_hours() + candidate.block_hours <= self.limits.max_block_hours
    }

    /// Rest between `previous` ending and `next` starting meets the minimum.
    pub fn rest_between(&self, previous: &DutyInterval, next: &DutyInterval) -> bool {
        next.start - previous.end >= self.limits.min_rest()
    }

    /// The candidate keeps the minimum rest to its nearest duty on either side.
    pub fn has_minimum_rest(&self, roster: &DutyRoster<'_>, candidate: &Pairing) -> bool {
        let duty = DutyInterval::of(candidate);
        let (previous, next) = roster.neighbours(&duty);
        previous.is_none_or(|prev| self.rest_between(prev, &duty))
            && next.is_none_or(|next| self.rest_between(&duty, next))
    }

    /// The candidate intersects no duty already on the line.
    pub fn no_overlap(&self, roster: &DutyRoster<'_>, candidate: &Pairing) -> bool {
        let duty = DutyInterval::of(candidate);
        let (previous, next) = roster.neighbours(&duty);
        !previous.is_some_and(|d| d.overlaps(&duty)) && !next.is_some_and(|d| d.overlaps(&duty))
    }

    /// No date of the candidate's span is hard-blocked.
    pub fn avoids_blocked_dates(&self, candidate: &Pairing, blocked: &BTreeSet<NaiveDate>) -> bool {
        if blocked.is_empty() {
            return true;
        }
        blocked
            .range(candidate.departure.date()..=candidate.arrival.date())
            .next()
            .is_none()
    }

    /// First constraint the candidate breaks, or `None` when it is eligible.
    pub fn first_violation(
        &self,
        roster: &DutyRoster<'_>,
        candidate: &Pairing,
        blocked: &BTreeSet<NaiveDate>,
    ) -> Option<Violation> {
        if !self.avoids_blocked_dates(candidate, blocked) {
            Some(Violation::BlockedDate)
        } else if !self.no_overlap(roster, candidate) {
            Some(Violation::Overlap)
        } else if !self.has_minimum_rest(roster, candidate) {
            Some(Violation::InsufficientRest)
        } else if !self.fits_block_cap(roster, candidate) {
            Some(Violation::BlockCap)
        } else {
            None
        }
    }

    /// Whether all four predicates pass.
    pub fn admits(
        &self,
        roster: &DutyRoster<'_>,
        candidate: &Pairing,
        blocked: &BTreeSet<NaiveDate>,
    ) -> bool {
        self.first_violation(roster, candidate, blocked).is_none()
    }
}
