//! Sequence helpers layered on top of `Iterator` and `itertools`.

use std::fmt::Display;

use itertools::{EitherOrBoth, Itertools};

use crate::error::Error;
use crate::result::Result;

/// Extension trait adding positional and zipping helpers to every iterator.
pub trait IterExt: Iterator + Sized {
    /// The first element matching `predicate`, without failing on empty input.
    fn first_or_none<P>(mut self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate)
    }

    /// Rotate so the element at `index` comes first and the skipped prefix
    /// goes to the end. An `index` past the end leaves the order unchanged.
    fn pivot(self, index: usize) -> Vec<Self::Item> {
        let mut items: Vec<_> = self.collect();
        let mid = index.min(items.len());
        items.rotate_left(mid);
        items
    }

    /// Split into the elements before `index` and the rest.
    fn split_at_index(self, index: usize) -> (Vec<Self::Item>, Vec<Self::Item>) {
        let mut before: Vec<_> = self.collect();
        let at = index.min(before.len());
        let after = before.split_off(at);
        (before, after)
    }

    /// Collect with `item` inserted before the element at `index`.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` when `index` is greater than the length.
    fn insert_at(self, index: usize, item: Self::Item) -> Result<Vec<Self::Item>> {
        let mut items: Vec<_> = self.collect();
        if index > items.len() {
            return Err(Error::index_out_of_bounds(index, items.len()));
        }
        items.insert(index, item);
        Ok(items)
    }

    /// The element at `index`, or the last element when the sequence is
    /// shorter. `None` only for an empty sequence.
    fn element_at_or_last(self, index: usize) -> Option<Self::Item> {
        self.take(index.saturating_add(1)).last()
    }

    /// Zip to the length of the longer side, padding with `Default`.
    fn zip_or_default<J>(self, other: J) -> Vec<(Self::Item, J::Item)>
    where
        J: IntoIterator,
        Self::Item: Default,
        J::Item: Default,
    {
        self.zip_or_else(other, Default::default, Default::default)
    }

    /// Zip to the length of the longer side, padding with generated values.
    fn zip_or_else<J, FA, FB>(
        self,
        other: J,
        mut fill_left: FA,
        mut fill_right: FB,
    ) -> Vec<(Self::Item, J::Item)>
    where
        J: IntoIterator,
        FA: FnMut() -> Self::Item,
        FB: FnMut() -> J::Item,
    {
        self.zip_longest(other)
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => (a, b),
                EitherOrBoth::Left(a) => (a, fill_right()),
                EitherOrBoth::Right(b) => (fill_left(), b),
            })
            .collect()
    }

    /// Whether the sequence begins with every element of `prefix`.
    fn starts_with<J>(self, prefix: J) -> bool
    where
        J: IntoIterator,
        Self::Item: PartialEq<J::Item>,
    {
        self.zip_longest(prefix)
            .find_map(|pair| match pair {
                EitherOrBoth::Both(a, b) => (a != b).then_some(false),
                EitherOrBoth::Left(_) => Some(true),
                EitherOrBoth::Right(_) => Some(false),
            })
            .unwrap_or(true)
    }

    /// Render as `[a, b, c]`.
    fn to_delim_string(mut self) -> String
    where
        Self::Item: Display,
    {
        format!("[{}]", Itertools::join(&mut self, ", "))
    }

    /// Pair every element with a value derived from it.
    fn pair_with<U, F>(self, mut f: F) -> impl Iterator<Item = (Self::Item, U)>
    where
        F: FnMut(&Self::Item) -> U,
    {
        self.map(move |item| {
            let derived = f(&item);
            (item, derived)
        })
    }
}

impl<I: Iterator> IterExt for I {}

/// Zip any number of sequences of uneven length.
///
/// Each step collects the next element of every sequence that still has one;
/// iteration stops once all of them are exhausted.
pub fn zip_ragged<S, I>(sources: S) -> Vec<Vec<I::Item>>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator,
{
    let mut cursors: Vec<_> = sources
        .into_iter()
        .map(|source| source.into_iter().fuse())
        .collect();

    std::iter::from_fn(|| {
        let step: Vec<_> = cursors.iter_mut().filter_map(Iterator::next).collect();
        (!step.is_empty()).then_some(step)
    })
    .collect()
}
