//! Preference set.
//!
//! User-defined scoring rules modelled as a closed enum, one variant per
//! rule kind with exactly the parameters that kind needs.

mod set;
mod types;

pub use set::{PreferenceEntry, PreferenceId, PreferenceSet};
pub use types::{Preference, PreferenceKind, TimeWindow};
