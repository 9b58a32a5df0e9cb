//! Constraint validator.
//!
//! Hard feasibility rules a generated line must satisfy:
//!
//! - **Block cap**: selected block hours stay within the monthly limit
//! - **Minimum rest**: the gap to the nearest duty on either side meets the minimum
//! - **No overlap**: duty intervals never intersect, pre-assigned trips included
//! - **Blocked dates**: no trip touches a date marked "block completely"
//!
//! The predicates are pure and never fail. [`DutyRoster`] holds the partial
//! line they are evaluated against, modelled as a set of fixed
//! [`DutyInterval`]s in the style of a disjunctive no-overlap resource.

mod config;
mod validator;

pub use config::{ConstraintLimits, MAX_LIMIT_HOURS};
pub use validator::{ConstraintValidator, DutyInterval, DutyRoster, Violation};
