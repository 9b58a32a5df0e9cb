//! Validated pairing collection for one bid month.

use super::types::{BidMonth, Pairing};
use crate::error::CatalogError;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Immutable, validated set of pairings for one bid month.
///
/// Pairings are held sorted by id so that every downstream pass iterates
/// them in the same order.
///
/// # Examples
///
/// ```
/// use bidline::catalog::{Pairing, PairingCatalog};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 10, d).unwrap();
/// let catalog = PairingCatalog::new(vec![
///     Pairing::new("B2", day(3).and_hms_opt(8, 0, 0).unwrap(), day(4).and_hms_opt(17, 0, 0).unwrap())
///         .with_route_str("ORD - DEN - ORD")
///         .with_block_hours(9.0),
///     Pairing::new("A1", day(1).and_hms_opt(7, 0, 0).unwrap(), day(1).and_hms_opt(19, 0, 0).unwrap())
///         .with_route_str("ORD - LGA - ORD")
///         .with_block_hours(5.5),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.month().month(), 10);
/// assert_eq!(catalog.pairings()[0].id, "A1");
/// ```
#[derive(Debug, Clone)]
pub struct PairingCatalog {
    month: BidMonth,
    pairings: Vec<Pairing>,
}

impl PairingCatalog {
    /// Builds a catalog, inferring the bid month from departure dates.
    pub fn new(pairings: Vec<Pairing>) -> Result<Self, CatalogError> {
        let month = infer_month(&pairings).ok_or(CatalogError::EmptyCatalog)?;
        Self::with_month(month, pairings)
    }

    /// Builds a catalog for an explicit bid month.
    pub fn with_month(month: BidMonth, mut pairings: Vec<Pairing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(pairings.len());
        for p in &pairings {
            validate_pairing(p)?;
            if !seen.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
        }
        pairings.sort_by(|a, b| a.id.cmp(&b.id));

        debug!(
            month = %month,
            pairings = pairings.len(),
            pre_assigned = pairings.iter().filter(|p| p.pre_assigned).count(),
            "pairing catalog built"
        );

        Ok(Self { month, pairings })
    }

    /// Builds a catalog from an id-keyed mapping, as handed over by ingestion.
    pub fn from_map(map: HashMap<String, Pairing>) -> Result<Self, CatalogError> {
        for (key, p) in &map {
            if *key != p.id {
                return Err(CatalogError::IdMismatch {
                    key: key.clone(),
                    id: p.id.clone(),
                });
            }
        }
        Self::new(map.into_values().collect())
    }

    pub fn month(&self) -> BidMonth {
        self.month
    }

    /// All pairings, sorted by id.
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Pairing> {
        self.pairings
            .binary_search_by(|p| p.id.as_str().cmp(id))
            .ok()
            .map(|i| &self.pairings[i])
    }

    /// Pairings open for selection.
    pub fn available(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter().filter(|p| !p.pre_assigned)
    }

    /// Pairings already on the pilot's line.
    pub fn pre_assigned(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter().filter(|p| p.pre_assigned)
    }

    /// Returns a new catalog holding only the pairings accepted by `filter`.
    ///
    /// The bid month is kept even when the filter drops every pairing.
    pub fn filter(&self, filter: &PairingFilter) -> PairingCatalog {
        PairingCatalog {
            month: self.month,
            pairings: self
                .pairings
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect(),
        }
    }

    /// Summary figures for display.
    pub fn stats(&self) -> CatalogStats {
        let count = self.pairings.len();
        let mut duration_histogram = BTreeMap::new();
        let mut aircraft_counts = BTreeMap::new();
        let mut total_days = 0u64;
        let mut total_block = 0.0;

        for p in &self.pairings {
            *duration_histogram.entry(p.duration_days).or_insert(0) += 1;
            *aircraft_counts.entry(p.aircraft_type.clone()).or_insert(0) += 1;
            total_days += u64::from(p.duration_days);
            total_block += p.block_hours;
        }

        let (mean_duration_days, mean_block_hours) = if count == 0 {
            (0.0, 0.0)
        } else {
            (total_days as f64 / count as f64, total_block / count as f64)
        };

        CatalogStats {
            count,
            mean_duration_days,
            mean_block_hours,
            duration_histogram,
            aircraft_counts,
        }
    }
}

fn validate_pairing(p: &Pairing) -> Result<(), CatalogError> {
    if p.arrival <= p.departure {
        return Err(CatalogError::InvalidInterval { id: p.id.clone() });
    }
    if p.route.len() < 2 {
        return Err(CatalogError::EmptyRoute { id: p.id.clone() });
    }
    if !p.block_hours.is_finite() || p.block_hours < 0.0 {
        return Err(CatalogError::InvalidBlockHours {
            id: p.id.clone(),
            value: p.block_hours,
        });
    }
    if p.duration_days == 0 {
        return Err(CatalogError::InvalidDuration { id: p.id.clone() });
    }
    Ok(())
}

/// Most common departure month; the earliest wins a tie.
fn infer_month(pairings: &[Pairing]) -> Option<BidMonth> {
    let mut counts: BTreeMap<BidMonth, usize> = BTreeMap::new();
    for p in pairings {
        *counts.entry(BidMonth::of(p.departure.date())).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(BidMonth, usize)>, (month, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((month, n)),
        })
        .map(|(month, _)| month)
}

/// Display-side narrowing of a catalog.
///
/// Every criterion left unset accepts all pairings.
///
/// ```
/// use bidline::catalog::PairingFilter;
///
/// let filter = PairingFilter::new()
///     .with_search("mia")
///     .with_max_duration(3)
///     .with_aircraft(["737", "320"]);
/// assert_eq!(filter.max_duration, Some(3));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PairingFilter {
    /// Case-insensitive text matched against id, route and aircraft code.
    pub search: Option<String>,
    /// Longest trip accepted, in days.
    pub max_duration: Option<u32>,
    /// Accepted aircraft codes. Empty accepts all.
    pub aircraft: Vec<String>,
    /// Earliest departure date accepted.
    pub departs_from: Option<NaiveDate>,
    /// Latest departure date accepted.
    pub departs_until: Option<NaiveDate>,
}

impl PairingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn with_max_duration(mut self, days: u32) -> Self {
        self.max_duration = Some(days);
        self
    }

    pub fn with_aircraft<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aircraft = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_departure_range(mut self, from: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        self.departs_from = from;
        self.departs_until = until;
        self
    }

    pub fn matches(&self, p: &Pairing) -> bool {
        if let Some(text) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let needle = text.to_ascii_uppercase();
            let hit = p.id.to_ascii_uppercase().contains(&needle)
                || p.aircraft_type.to_ascii_uppercase().contains(&needle)
                || p.route.join(" - ").contains(&needle);
            if !hit {
                return false;
            }
        }
        if self.max_duration.is_some_and(|max| p.duration_days > max) {
            return false;
        }
        if !self.aircraft.is_empty()
            && !self
                .aircraft
                .iter()
                .any(|a| a.eq_ignore_ascii_case(&p.aircraft_type))
        {
            return false;
        }
        let date = p.departure.date();
        if self.departs_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.departs_until.is_some_and(|until| date > until) {
            return false;
        }
        true
    }
}

/// Aggregate figures over a catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogStats {
    pub count: usize,
    pub mean_duration_days: f64,
    pub mean_block_hours: f64,
    /// Trip length in days -> number of pairings.
    pub duration_histogram: BTreeMap<u32, usize>,
    /// Aircraft code -> number of pairings.
    pub aircraft_counts: BTreeMap<String, usize>,
}
