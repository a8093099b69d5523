//! Result type definition and extension traits for Railway-Oriented Programming.
//!
//! `std::result::Result` already is the tagged union; everything here fills the
//! gaps in its combinator vocabulary without reaching for `expect`.

use std::fmt::Display;

use crate::error::{Error, Variant};

/// The standard Result type for extkit operations.
///
/// All fallible operations in extkit return this type.
/// Use the `?` operator, `match`, or combinator methods to handle results.
///
/// # Examples
///
/// ```
/// use extkit_core::{Result, ResultExt};
///
/// fn parse(raw: &str) -> Result<u16> {
///     raw.parse::<u16>().require_ok("port must be numeric")
/// }
///
/// assert_eq!(parse("8080"), Ok(8080));
/// assert!(parse("http").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing safe combinators for any Result.
pub trait ResultExt<T, E> {
    /// Extract the `Ok` payload, or fail with a [`Error::VariantMismatch`]
    /// carrying `message`. The non-panicking counterpart of `expect`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VariantMismatch` when the result is `Err`.
    fn require_ok(self, message: impl Into<String>) -> Result<T>;

    /// Extract the `Err` payload, or fail with a [`Error::VariantMismatch`]
    /// carrying `message`. The non-panicking counterpart of `expect_err`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VariantMismatch` when the result is `Ok`.
    fn require_err(self, message: impl Into<String>) -> Result<E>;

    /// Map both Ok and Err in a single operation.
    ///
    /// # Errors
    ///
    /// Returns `err_fn` applied to the error when `self` is `Err`.
    fn map_both<U, E2, F, EF>(self, ok_fn: F, err_fn: EF) -> std::result::Result<U, E2>
    where
        F: FnOnce(T) -> U,
        EF: FnOnce(E) -> E2;

    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>
    where
        E: Display;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
    fn require_ok(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|_| Error::variant_mismatch(Variant::Ok, message))
    }

    fn require_err(self, message: impl Into<String>) -> Result<E> {
        match self {
            Ok(_) => Err(Error::variant_mismatch(Variant::Err, message)),
            Err(e) => Ok(e),
        }
    }

    fn map_both<U, E2, F, EF>(self, ok_fn: F, err_fn: EF) -> std::result::Result<U, E2>
    where
        F: FnOnce(T) -> U,
        EF: FnOnce(E) -> E2,
    {
        match self {
            Ok(v) => Ok(ok_fn(v)),
            Err(e) => Err(err_fn(e)),
        }
    }

    fn into_option_logged(self) -> Option<T>
    where
        E: Display,
    {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T
    where
        E: Display,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

/// Collapse one layer of `Result` nesting when both layers share an error type.
pub trait ResultFlattenExt<T, E> {
    /// `Ok(Ok(v))` becomes `Ok(v)`; an `Err` at either layer is kept as is.
    fn flatten_result(self) -> std::result::Result<T, E>;
}

impl<T, E> ResultFlattenExt<T, E> for std::result::Result<std::result::Result<T, E>, E> {
    fn flatten_result(self) -> std::result::Result<T, E> {
        self.and_then(|inner| inner)
    }
}
