//! The bidirectional map itself.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use extkit_core::{Error, Result, Side};

use crate::evicted::Evicted;

/// A one-to-one map between a left and a right key space.
///
/// Two persistent hash maps are kept in lock-step, so lookups are cheap from
/// either side and cloning the whole map is O(1).
///
/// # Examples
///
/// ```
/// use extkit_bimap::{BiMap, Evicted};
///
/// let mut ports = BiMap::new();
/// ports.insert("http", 80);
/// ports.insert("https", 443);
///
/// assert_eq!(ports.get_by_left("http"), Some(&80));
/// assert_eq!(ports.get_by_right(&443), Some(&"https"));
///
/// // Re-pairing a key evicts its old partner on both sides.
/// assert_eq!(ports.insert("http", 8080), Evicted::Left("http", 80));
/// assert!(!ports.contains_right(&80));
/// ```
#[derive(Clone)]
pub struct BiMap<L, R> {
    forward: im::HashMap<L, R>,
    reverse: im::HashMap<R, L>,
}

impl<L, R> BiMap<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            forward: im::HashMap::new(),
            reverse: im::HashMap::new(),
        }
    }

    /// Pair `left` with `right`.
    ///
    /// Any existing pairing of either key is removed from both sides first,
    /// so the map stays a bijection. The return value reports what was
    /// displaced.
    pub fn insert(&mut self, left: L, right: R) -> Evicted<L, R> {
        let by_left = self.forward.remove(&left);
        if let Some(old_right) = &by_left {
            self.reverse.remove(old_right);
        }
        let by_right = self.reverse.remove(&right);
        if let Some(old_left) = &by_right {
            self.forward.remove(old_left);
        }

        let evicted = match (by_left, by_right) {
            (None, None) => Evicted::Vacant,
            (Some(old_right), None) if old_right == right => Evicted::Same(left.clone(), old_right),
            (Some(old_right), None) => Evicted::Left(left.clone(), old_right),
            (None, Some(old_left)) => Evicted::Right(old_left, right.clone()),
            (Some(old_right), Some(old_left)) => {
                Evicted::Both((left.clone(), old_right), (old_left, right.clone()))
            }
        };
        if evicted.did_evict() {
            tracing::debug!(len = self.forward.len(), "insert displaced an existing pairing");
        }

        self.forward.insert(left.clone(), right.clone());
        self.reverse.insert(right, left);
        evicted
    }

    /// Pair `left` with `right` only if neither key is already paired.
    ///
    /// Returns whether the pair was inserted.
    pub fn try_insert(&mut self, left: L, right: R) -> bool {
        if self.forward.contains_key(&left) || self.reverse.contains_key(&right) {
            return false;
        }
        self.forward.insert(left.clone(), right.clone());
        self.reverse.insert(right, left);
        true
    }

    /// The right key paired with `left`, if any.
    #[must_use]
    pub fn get_by_left<Q>(&self, left: &Q) -> Option<&R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(left)
    }

    /// The left key paired with `right`, if any.
    #[must_use]
    pub fn get_by_right<Q>(&self, right: &Q) -> Option<&L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.get(right)
    }

    /// The right key paired with `left`.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if `left` is not paired.
    pub fn require_by_left<Q>(&self, left: &Q) -> Result<&R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.get_by_left(left)
            .ok_or_else(|| Error::key_not_found(Side::Left, &left))
    }

    /// The left key paired with `right`.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if `right` is not paired.
    pub fn require_by_right<Q>(&self, right: &Q) -> Result<&L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.get_by_right(right)
            .ok_or_else(|| Error::key_not_found(Side::Right, &right))
    }

    /// Whether `left` is paired.
    #[must_use]
    pub fn contains_left<Q>(&self, left: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(left)
    }

    /// Whether `right` is paired.
    #[must_use]
    pub fn contains_right<Q>(&self, right: &Q) -> bool
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse.contains_key(right)
    }

    /// Remove the pairing of `left`, returning both keys if it existed.
    pub fn try_remove_by_left<Q>(&mut self, left: &Q) -> Option<(L, R)>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (l, r) = self.forward.remove_with_key(left)?;
        self.reverse.remove(&r);
        Some((l, r))
    }

    /// Remove the pairing of `right`, returning both keys if it existed.
    pub fn try_remove_by_right<Q>(&mut self, right: &Q) -> Option<(L, R)>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (r, l) = self.reverse.remove_with_key(right)?;
        self.forward.remove(&l);
        Some((l, r))
    }

    /// Remove the pairing of `left`, returning its right key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if `left` is not paired.
    pub fn remove_by_left<Q>(&mut self, left: &Q) -> Result<R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.try_remove_by_left(left)
            .map(|(_, r)| r)
            .ok_or_else(|| Error::key_not_found(Side::Left, &left))
    }

    /// Remove the pairing of `right`, returning its left key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if `right` is not paired.
    pub fn remove_by_right<Q>(&mut self, right: &Q) -> Result<L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.try_remove_by_right(right)
            .map(|(l, _)| l)
            .ok_or_else(|| Error::key_not_found(Side::Right, &right))
    }

    /// Remove `left <-> right` only if exactly that pairing is present.
    pub fn remove_pair(&mut self, left: &L, right: &R) -> bool {
        if self.forward.get(left) != Some(right) {
            return false;
        }
        self.forward.remove(left);
        self.reverse.remove(right);
        true
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the map holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Remove every pair from both sides.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }

    /// All left keys, in the forward map's iteration order.
    pub fn left_values(&self) -> impl Iterator<Item = &L> {
        self.forward.keys()
    }

    /// All right keys, in the forward map's iteration order.
    pub fn right_values(&self) -> impl Iterator<Item = &R> {
        self.forward.values()
    }

    /// All pairs as `(left, right)`. Order is unspecified.
    #[must_use]
    pub fn iter(&self) -> im::hashmap::Iter<'_, L, R> {
        self.forward.iter()
    }

    /// Whether both sides agree on every pairing.
    ///
    /// Always true for maps built through this API; exposed for tests and
    /// debug assertions in callers.
    #[must_use]
    pub fn is_bijective(&self) -> bool {
        self.forward.len() == self.reverse.len()
            && self
                .forward
                .iter()
                .all(|(l, r)| self.reverse.get(r) == Some(l))
    }
}

impl<L, R> Default for BiMap<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R> fmt::Debug for BiMap<L, R>
where
    L: Hash + Eq + Clone + fmt::Debug,
    R: Hash + Eq + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}

impl<L, R> PartialEq for BiMap<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<L, R> Eq for BiMap<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
}

impl<L, R> FromIterator<(L, R)> for BiMap<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<L, R> Extend<(L, R)> for BiMap<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(l, r)| {
            self.insert(l, r);
        });
    }
}

impl<'a, L, R> IntoIterator for &'a BiMap<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    type Item = (&'a L, &'a R);
    type IntoIter = im::hashmap::Iter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
