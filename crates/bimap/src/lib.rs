//! # extkit bimap
//!
//! A bidirectional map: a one-to-one association between a left and a right
//! key space, queryable and mutable from either side.
//!
//! ## Invariant
//!
//! For every pair `(l, r)` in the map, looking up `l` yields `r` and looking up
//! `r` yields `l`; both sides always hold the same number of entries.
//! Re-pairing a key that is already paired evicts its old partner from both
//! sides, and [`BiMap::insert`] reports what was evicted.
//!
//! ## Error Handling
//!
//! Lookups that require a key to exist (`require_by_*`, `remove_by_*`) return
//! `extkit_core::Error::KeyNotFound`; the `get_by_*` / `try_*` forms never fail.

mod evicted;
mod map;

pub use evicted::Evicted;
pub use map::BiMap;
