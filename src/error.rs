//! Error types.
//!
//! Scoring, constraint checks and schedule generation are infallible; only
//! catalog construction and configuration loading can fail.

use thiserror::Error;

/// Rejection of a pairing set while building a [`PairingCatalog`](crate::catalog::PairingCatalog).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate pairing id: {0}")]
    DuplicateId(String),

    #[error("pairing {id}: arrival must be after departure")]
    InvalidInterval { id: String },

    #[error("pairing {id}: route needs at least two airport codes")]
    EmptyRoute { id: String },

    #[error("pairing {id}: invalid block hours {value}")]
    InvalidBlockHours { id: String, value: f64 },

    #[error("pairing {id}: duration must be at least one day")]
    InvalidDuration { id: String },

    #[error("catalog key {key} does not match pairing id {id}")]
    IdMismatch { key: String, id: String },

    #[error("cannot infer a bid month from an empty catalog")]
    EmptyCatalog,
}

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "toml")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
