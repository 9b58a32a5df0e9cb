//! Preference-weighted pairing scoring and monthly bid-line generation.
//!
//! An airline pilot bids each month on a set of trips ("pairings"). This
//! crate ranks the month's pairings against the pilot's preferences and
//! builds feasible monthly schedules under three strategies:
//!
//! - **Catalog**: validated, id-ordered pairings of one bid month, with
//!   filtering and summary statistics.
//! - **Preferences**: typed preference rules held in an ordered, editable
//!   set with stable ids.
//! - **Scoring**: additive, explainable per-pairing scores with a per-rule
//!   breakdown.
//! - **Constraints**: hard feasibility predicates (block-hour cap, minimum
//!   rest, no overlap, hard-blocked dates).
//! - **Ordering**: lexicographic priority-rule composition used to order
//!   candidates for each strategy.
//! - **Generator**: deterministic greedy construction of one schedule per
//!   strategy, optionally in parallel and with cancellation.
//!
//! # Example
//!
//! ```
//! use bidline::catalog::{Pairing, PairingCatalog};
//! use bidline::config::EngineConfig;
//! use bidline::generator::{ScheduleGenerator, Strategy};
//! use bidline::preference::{Preference, PreferenceSet};
//! use chrono::NaiveDate;
//!
//! let at = |d, h| NaiveDate::from_ymd_opt(2025, 10, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
//! let catalog = PairingCatalog::new(vec![
//!     Pairing::new("P1", at(1, 8), at(2, 18)).with_route_str("JFK - MIA - JFK").with_block_hours(20.0),
//!     Pairing::new("P2", at(14, 8), at(16, 18)).with_route_str("JFK - LAX - JFK").with_block_hours(20.0),
//! ])
//! .unwrap();
//!
//! let mut prefs = PreferenceSet::new();
//! prefs.add(Preference::block_date_off(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()));
//!
//! let result = ScheduleGenerator::run(&catalog, &prefs, &EngineConfig::default());
//! let plan_a = result.schedule(Strategy::EarningsMax).unwrap();
//! assert_eq!(plan_a.pairing_ids(), vec!["P1"]);
//! assert_eq!(plan_a.days_off, 29);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): build strategies concurrently with rayon.
//! - `serde`: `Serialize`/`Deserialize` for data and configuration types;
//!   unknown preference kinds decode to `Preference::Unrecognized`.
//! - `toml`: load [`config::EngineConfig`] from TOML (implies `serde`).
//!
//! The serde and TOML tests only build with their features enabled, so run
//! the full suite with `cargo test --all-features`.

pub mod catalog;
pub mod config;
pub mod constraints;
pub mod error;
pub mod generator;
pub mod ordering;
pub mod preference;
pub mod scoring;
