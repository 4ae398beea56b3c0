//! # Core Validation Errors
//!
//! Errors raised while constructing the foundational types. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! These are argument-validation failures: they are raised before any
//! state exists to mutate, so there is nothing to roll back.

use thiserror::Error;

/// Validation error for core type construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Edition component does not fit in 8 bits.
    #[error("edition {0} out of range (0-255)")]
    EditionOutOfRange(u64),

    /// Series component does not fit in 8 bits.
    #[error("series {0} out of range (0-255)")]
    SeriesOutOfRange(u64),

    /// Pressing component does not fit in 16 bits.
    #[error("pressing {0} out of range (0-65535)")]
    PressingOutOfRange(u64),

    /// Token identifier string is not a decimal `u32`.
    #[error("invalid token identifier {0:?}")]
    InvalidTokenId(String),

    /// Account identifiers are opaque but must not be empty.
    #[error("account identifier must not be empty")]
    EmptyAccount,

    /// Timestamp string could not be parsed.
    #[error("invalid RFC 3339 timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
