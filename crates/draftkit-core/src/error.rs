//! Error handling for DraftKit
//!
//! One error enum covers the whole core. Most interactive conditions
//! (out-of-range style edits, degenerate geometry, clicks that hit
//! nothing) are recovered silently per the interaction design and never
//! reach this type; what remains is genuine misuse or I/O.

use thiserror::Error;

/// DraftKit error type
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric field could not be parsed
    #[error("Invalid numeric input: {value:?}")]
    InvalidNumber {
        /// The raw field content.
        value: String,
    },

    /// Grid step must be strictly positive
    #[error("Grid step must be greater than zero, got {value}")]
    InvalidGridStep {
        /// The rejected step value.
        value: f64,
    },

    /// Referenced line style does not exist in the catalog
    #[error("Unknown line style: {id}")]
    UnknownStyle {
        /// The style identifier that was looked up.
        id: String,
    },

    /// Built-in GOST styles cannot be edited or deleted
    #[error("Built-in style '{id}' cannot be modified or deleted")]
    BuiltinStyleImmutable {
        /// The style identifier that was targeted.
        id: String,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// A message describing what went wrong.
        message: String,
    },

    /// Drawing surface could not be created
    #[error("Surface error: {message}")]
    Surface {
        /// A message describing what went wrong.
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the DraftKit error
pub type Result<T> = std::result::Result<T, Error>;
