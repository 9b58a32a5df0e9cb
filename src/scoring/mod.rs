//! Scoring engine.
//!
//! Maps a pairing and a preference set to a signed score plus a per-rule
//! breakdown. The model is additive: every active preference is evaluated
//! independently against the pairing and the deltas are summed, so the
//! total never depends on preference order and removing a preference
//! changes the total by exactly that preference's contribution.
//!
//! | Rule | Fires when | Default delta |
//! |---|---|---|
//! | MaximizeEarnings | always | +2 × block hours |
//! | PreferRoute | route contains the airport run | +30 |
//! | PreferDepartureWindow | departure time in window | +20 |
//! | MaxDuration | duration ≤ limit | +15 |
//! | MaxLegsPerDay | legs / days ≤ limit | +15 |
//! | AvoidRedEye | departure or arrival in red-eye window | −50 |
//! | AvoidAirport | route touches airport | −100 |
//! | BlockWeekday | per trip date on the weekday | −40 |
//! | BlockDateOff | trip touches the date | −500 |
//!
//! Unrecognized rule kinds contribute nothing.

mod config;
mod engine;

pub use config::ScoringConfig;
pub use engine::{RuleContribution, ScoredPairing, Scorer};
