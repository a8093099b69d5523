//! Extension traits for Option types providing Railway-style operations.
//!
//! `Option<T>` is already a sum type, so absence is exactly one tag and never
//! a null hiding inside `Some`. These traits add the combinators std leaves
//! out, plus helpers over sequences of options.

use crate::error::{Error, Variant};
use crate::result::Result;

/// Extension trait for a single `Option`.
pub trait OptionExt<T> {
    /// Extract the payload, or fail with a [`Error::VariantMismatch`]
    /// carrying `message`. The non-panicking counterpart of `expect`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VariantMismatch` when the option is `None`.
    fn require_some(self, message: impl Into<String>) -> Result<T>;

    /// `Some(f(a, b))` when both options are present, `None` otherwise.
    fn zip_map<U, R, F>(self, other: Option<U>, f: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R;

    /// Run `f` when the option is `None`, returning the option unchanged.
    #[must_use]
    fn tap_none<F: FnOnce()>(self, f: F) -> Self;
}

impl<T> OptionExt<T> for Option<T> {
    fn require_some(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| Error::variant_mismatch(Variant::Some, message))
    }

    fn zip_map<U, R, F>(self, other: Option<U>, f: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    fn tap_none<F: FnOnce()>(self, f: F) -> Self {
        if self.is_none() {
            f();
        }
        self
    }
}

/// Helpers over iterators whose items are options.
pub trait OptionIterExt<T>: Iterator<Item = Option<T>> + Sized {
    /// Only the present payloads, in order.
    fn where_some(self) -> std::iter::Flatten<Self> {
        self.flatten()
    }

    /// The payload of the first `Some`, or `None` if every item is absent.
    fn first_some(mut self) -> Option<T> {
        self.find_map(|item| item)
    }
}

impl<T, I> OptionIterExt<T> for I where I: Iterator<Item = Option<T>> {}
