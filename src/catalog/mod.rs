//! Pairing catalog.
//!
//! The normalized in-memory set of trips offered for one bid month. Built
//! once from the records handed over by ingestion and read-only afterwards;
//! scoring and schedule generation take it by shared reference.
//!
//! - [`Pairing`]: one trip with its duty interval, block hours and route
//! - [`BidMonth`]: the calendar month the bid covers
//! - [`PairingCatalog`]: validated, id-sorted collection
//! - [`PairingFilter`] / [`CatalogStats`]: display-side narrowing and summaries

mod collection;
mod types;

pub use collection::{CatalogStats, PairingCatalog, PairingFilter};
pub use types::{parse_route, BidMonth, Pairing};
pub(crate) use types::is_weekend;
