//! Error types for the `shravfolio-models` crate.
//!
//! All fallible constructors and parsers in this crate return variants of
//! [`ModelError`].

/// Errors produced when parsing or validating model values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A category label did not name one of the three pillars.
    #[error("unknown project category \"{value}\"")]
    UnknownCategory {
        /// The value that failed validation.
        value: String,
    },

    /// A timestamp could not be turned into a calendar year.
    #[error("invalid timestamp \"{value}\": {reason}")]
    InvalidTimestamp {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },
}
