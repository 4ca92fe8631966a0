//! Error types for decoding battle inputs and loading display configuration.
//!
//! The builders in [`crate::presenter`] and [`crate::equipment`] are total and
//! never return errors. Everything that can fail happens at the edges: turning
//! JSON into [`crate::model::Player`], catalogs, or [`crate::config::DisplayConfig`].

use thiserror::Error;

/// Errors produced at the crate's input boundaries.
#[derive(Debug, Error)]
pub enum BattlelogError {
    /// A JSON document could not be decoded into the expected shape.
    ///
    /// Wrong-arity teams (anything other than three fighters with three
    /// parts each) surface here.
    #[error("failed to decode {what}: {source}")]
    Decode {
        /// What was being decoded (e.g. "player", "rune catalog")
        what: &'static str,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is outside its accepted range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },
}

impl BattlelogError {
    pub(crate) fn decode(what: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { what, source }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BattlelogError>;
