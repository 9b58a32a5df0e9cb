//! Priority rule composition for candidate ordering.
//!
//! Each schedule strategy orders its candidate pairings with a short
//! sequence of rules. Rules are applied lexicographically: later rules
//! only break ties left by earlier ones.
//!
//! # References
//!
//! Dispatching rule composition: Pinedo (2016), "Scheduling: Theory,
//! Algorithms, and Systems"

mod engine;
mod rules;
mod types;

pub use engine::RuleEngine;
pub use rules::{
    MostBlockHours, OrderingContext, PreferenceScore, ShortestTrip, WeekendsKeptFree,
};
pub use types::PriorityRule;
