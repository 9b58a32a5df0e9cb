//! Schedule generation.
//!
//! Builds one monthly line per [`Strategy`] by a single greedy pass over
//! strategy-ordered candidates. Every accepted trip keeps the line
//! feasible: no overlap, minimum rest, block-hour cap and no hard-blocked
//! dates, counted against pre-assigned trips as well.
//!
//! | Strategy | Candidate order |
//! |---|---|
//! | EarningsMax | block hours desc |
//! | LifestyleComfort | trip days asc, then comfort score desc |
//! | WeekendsFree | free weekend days desc, then block hours desc |
//!
//! Remaining ties fall back to pairing id order.

mod config;
mod runner;
mod types;

pub use config::GeneratorConfig;
pub use runner::ScheduleGenerator;
pub use types::{GenerationResult, Schedule, StopReason, Strategy};
