//! Pairing priority rules used by the schedule strategies.

use super::types::PriorityRule;
use crate::catalog::{is_weekend, BidMonth, Pairing};
use crate::preference::PreferenceSet;
use crate::scoring::Scorer;

/// State the pairing rules read while ordering candidates.
pub struct OrderingContext<'a> {
    pub month: BidMonth,
    pub scorer: Scorer<'a>,
    /// Preferences evaluated by [`PreferenceScore`].
    pub preferences: &'a PreferenceSet,
}

/// Most block hours first.
pub struct MostBlockHours;

impl PriorityRule<Pairing, OrderingContext<'_>> for MostBlockHours {
    fn name(&self) -> &str {
        "MostBlockHours"
    }

    fn score(&self, pairing: &Pairing, _ctx: &OrderingContext<'_>) -> f64 {
        -pairing.block_hours
    }
}

/// Fewest trip days first.
pub struct ShortestTrip;

impl PriorityRule<Pairing, OrderingContext<'_>> for ShortestTrip {
    fn name(&self) -> &str {
        "ShortestTrip"
    }

    fn score(&self, pairing: &Pairing, _ctx: &OrderingContext<'_>) -> f64 {
        f64::from(pairing.duration_days)
    }
}

/// Highest preference score first, under the context's preference set.
pub struct PreferenceScore;

impl PriorityRule<Pairing, OrderingContext<'_>> for PreferenceScore {
    fn name(&self) -> &str {
        "PreferenceScore"
    }

    fn score(&self, pairing: &Pairing, ctx: &OrderingContext<'_>) -> f64 {
        -ctx.scorer.score(pairing, ctx.preferences)
    }
}

/// Most weekend days of the bid month left uncovered first.
pub struct WeekendsKeptFree;

impl PriorityRule<Pairing, OrderingContext<'_>> for WeekendsKeptFree {
    fn name(&self) -> &str {
        "WeekendsKeptFree"
    }

    fn score(&self, pairing: &Pairing, ctx: &OrderingContext<'_>) -> f64 {
        let free = ctx
            .month
            .days()
            .filter(|d| is_weekend(*d) && !pairing.covers_date(*d))
            .count();
        -(free as f64)
    }
}
