//! Core error types for extkit operations using Railway-Oriented Programming.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::fmt;

use thiserror::Error;

/// The variant a `require_*` combinator expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Some,
    Ok,
    Err,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some => write!(f, "Some"),
            Self::Ok => write!(f, "Ok"),
            Self::Err => write!(f, "Err"),
        }
    }
}

/// Which key space of a bidirectional map a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Core error type for extkit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Tagged-union misuse
    #[error("expected {expected} variant: {message}")]
    VariantMismatch { expected: Variant, message: String },

    // Lookup errors
    #[error("{side} key not found: {key}")]
    KeyNotFound { side: Side, key: String },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("not found: {0}")]
    NotFound(String),

    // Sequence errors
    #[error("{operation} called on an empty sequence")]
    EmptySequence { operation: &'static str },

    #[error("{collection} contains duplicate items")]
    DuplicateItem { collection: &'static str },

    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Create a variant mismatch error.
    pub fn variant_mismatch(expected: Variant, message: impl Into<String>) -> Self {
        Self::VariantMismatch {
            expected,
            message: message.into(),
        }
    }

    /// Create a key-not-found error, rendering the key with `Debug`.
    pub fn key_not_found(side: Side, key: &impl fmt::Debug) -> Self {
        Self::KeyNotFound {
            side,
            key: format!("{key:?}"),
        }
    }

    /// Create an out-of-bounds error.
    #[must_use]
    pub const fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create an invalid state error.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState(reason.into())
    }

    /// Returns the machine-readable error code for this error.
    ///
    /// Error codes are always in `SCREAMING_SNAKE_CASE` format.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::VariantMismatch { .. } => "VARIANT_MISMATCH",
            Self::KeyNotFound { .. } => "KEY_NOT_FOUND",
            Self::IndexOutOfBounds { .. } => "INDEX_OUT_OF_BOUNDS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::EmptySequence { .. } => "EMPTY_SEQUENCE",
            Self::DuplicateItem { .. } => "DUPLICATE_ITEM",
            Self::InvalidState(_) => "INVALID_STATE",
        }
    }
}
