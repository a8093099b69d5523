//! Report of the pairings an insert displaced.

/// What [`crate::BiMap::insert`] had to remove to keep the map one-to-one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evicted<L, R> {
    /// Neither key was paired before.
    Vacant,
    /// The exact pair was already present and has been re-inserted.
    Same(L, R),
    /// The left key was paired with a different right key.
    Left(L, R),
    /// The right key was paired with a different left key.
    Right(L, R),
    /// Both keys were paired elsewhere: `(left's old pair, right's old pair)`.
    Both((L, R), (L, R)),
}

impl<L, R> Evicted<L, R> {
    /// Whether a pairing other than the inserted one was removed.
    #[must_use]
    pub const fn did_evict(&self) -> bool {
        matches!(self, Self::Left(..) | Self::Right(..) | Self::Both(..))
    }

    /// The removed pairings that differ from the inserted one.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(L, R)> {
        match self {
            Self::Vacant | Self::Same(..) => Vec::new(),
            Self::Left(l, r) | Self::Right(l, r) => vec![(l, r)],
            Self::Both(first, second) => vec![first, second],
        }
    }
}
