//! Additive preference scoring.

use super::config::ScoringConfig;
use crate::catalog::{Pairing, PairingCatalog};
use crate::preference::{Preference, PreferenceId, PreferenceKind, PreferenceSet};
use std::collections::BTreeMap;

/// What one preference contributed to a pairing's score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleContribution {
    pub kind: PreferenceKind,
    pub delta: f64,
    /// Short human-readable reason, e.g. "Route includes MIA".
    pub note: String,
}

impl RuleContribution {
    pub fn is_match(&self) -> bool {
        self.delta > 0.0
    }

    pub fn is_violation(&self) -> bool {
        self.delta < 0.0
    }
}

/// A pairing annotated with its score under one preference set.
///
/// Derived data: recomputed whenever the preference set changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPairing {
    pub pairing: Pairing,
    pub score: f64,
    /// Contributions of the rules that fired, keyed by preference.
    pub breakdown: BTreeMap<PreferenceId, RuleContribution>,
}

impl ScoredPairing {
    pub fn id(&self) -> &str {
        &self.pairing.id
    }

    /// Rules that raised the score.
    pub fn matched(&self) -> impl Iterator<Item = (PreferenceId, &RuleContribution)> {
        self.breakdown
            .iter()
            .filter(|(_, c)| c.is_match())
            .map(|(id, c)| (*id, c))
    }

    /// Rules that lowered the score.
    pub fn violated(&self) -> impl Iterator<Item = (PreferenceId, &RuleContribution)> {
        self.breakdown
            .iter()
            .filter(|(_, c)| c.is_violation())
            .map(|(id, c)| (*id, c))
    }

    /// Contribution of a single preference, zero when it did not fire.
    pub fn delta_of(&self, id: PreferenceId) -> f64 {
        self.breakdown.get(&id).map_or(0.0, |c| c.delta)
    }
}

/// Pure scoring function over a fixed weight table.
///
/// # Examples
///
/// ```
/// use bidline::catalog::Pairing;
/// use bidline::preference::{Preference, PreferenceSet};
/// use bidline::scoring::{Scorer, ScoringConfig};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 10, 14).unwrap();
/// let pairing = Pairing::new("P1", day.and_hms_opt(9, 0, 0).unwrap(), day.and_hms_opt(21, 0, 0).unwrap())
///     .with_route_str("JFK - MIA - JFK")
///     .with_block_hours(6.0);
///
/// let mut prefs = PreferenceSet::new();
/// prefs.add(Preference::MaximizeEarnings);
/// prefs.add(Preference::prefer_route("MIA"));
///
/// let config = ScoringConfig::default();
/// let scored = Scorer::new(&config).evaluate(&pairing, &prefs);
/// assert!((scored.score - 42.0).abs() < 1e-10);
/// assert_eq!(scored.matched().count(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> Scorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Total score only.
    pub fn score(&self, pairing: &Pairing, prefs: &PreferenceSet) -> f64 {
        prefs
            .iter()
            .filter_map(|e| self.rule_delta(pairing, &e.preference))
            .map(|(delta, _)| delta)
            .sum()
    }

    /// Score plus per-rule breakdown.
    pub fn evaluate(&self, pairing: &Pairing, prefs: &PreferenceSet) -> ScoredPairing {
        let mut breakdown = BTreeMap::new();
        let mut score = 0.0;

        for entry in prefs {
            if let Some((delta, note)) = self.rule_delta(pairing, &entry.preference) {
                score += delta;
                breakdown.insert(
                    entry.id,
                    RuleContribution {
                        kind: entry.preference.kind(),
                        delta,
                        note,
                    },
                );
            }
        }

        ScoredPairing {
            pairing: pairing.clone(),
            score,
            breakdown,
        }
    }

    /// Scores every pairing, best first; ties go to the lower id.
    pub fn rank(&self, catalog: &PairingCatalog, prefs: &PreferenceSet) -> Vec<ScoredPairing> {
        let mut ranked: Vec<ScoredPairing> = catalog
            .pairings()
            .iter()
            .map(|p| self.evaluate(p, prefs))
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.pairing.id.cmp(&b.pairing.id))
        });
        ranked
    }

    /// Delta and note of one rule, `None` when it does not fire or its
    /// weight is zero.
    fn rule_delta(&self, p: &Pairing, pref: &Preference) -> Option<(f64, String)> {
        let w = self.config;
        let fired = match pref {
            Preference::MaximizeEarnings => Some((
                w.earnings_per_block_hour * p.block_hours,
                format!("Earns {:.1} block hours", p.block_hours),
            )),

            Preference::PreferRoute { route } => p
                .contains_sequence(route)
                .then(|| (w.preferred_route, format!("Route includes {}", route.join("-")))),

            Preference::PreferDepartureWindow { window } => window
                .contains(p.departure.time())
                .then(|| (w.departure_window, format!("Departs within {window}"))),

            Preference::MaxDuration { max_days } => (p.duration_days <= *max_days)
                .then(|| (w.max_duration, format!("Duration within {max_days} days"))),

            Preference::MaxLegsPerDay { max_legs } => {
                let per_day = p.legs_per_day();
                (per_day <= f64::from(*max_legs)).then(|| {
                    (
                        w.max_legs_per_day,
                        format!("Low workload (~{per_day:.1} legs/day)"),
                    )
                })
            }

            Preference::AvoidRedEye => {
                let window = &w.red_eye_window;
                [("departure", p.departure), ("arrival", p.arrival)]
                    .into_iter()
                    .find(|(_, t)| window.contains(t.time()))
                    .map(|(leg, t)| (w.red_eye, format!("Red-eye {leg} {}", t.format("%H:%M"))))
            }

            Preference::AvoidAirport { airport } => p
                .visits(airport)
                .then(|| (w.avoided_airport, format!("Touches {airport}"))),

            Preference::BlockWeekday { weekday } => {
                let days = p.weekday_count(*weekday);
                (days > 0).then(|| {
                    (
                        w.blocked_weekday_per_day * days as f64,
                        format!("Works {days} requested {weekday} off"),
                    )
                })
            }

            Preference::BlockDateOff { date, .. } => p
                .covers_date(*date)
                .then(|| (w.blocked_date, format!("Conflicts with {}", date.format("%b %d")))),

            Preference::Unrecognized => None,
        };
        // a zero delta is neither a match nor a violation
        fired.filter(|(delta, _)| *delta != 0.0)
    }
}
