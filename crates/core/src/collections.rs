//! Mutation helpers for vectors and maps, plus ordered list reconciliation.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use itertools::Itertools;

use crate::error::Error;
use crate::result::Result;

/// Extension trait for `Vec<T>`.
pub trait VecExt<T> {
    /// Remove and return the first element.
    fn pop_front(&mut self) -> Option<T>;

    /// Remove and return the element at `index`, if there is one.
    fn remove_at(&mut self, index: usize) -> Option<T>;

    /// Move the first element equal to `item` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no element equals `item`, and
    /// `Error::IndexOutOfBounds` if `index` is not a valid position. The
    /// vector is left untouched on error.
    fn move_item(&mut self, item: &T, index: usize) -> Result<()>
    where
        T: PartialEq + Debug;

    /// Push `item` unless an equal element is already present.
    fn push_distinct(&mut self, item: T) -> bool
    where
        T: PartialEq;

    /// Append `count` elements produced by `factory`.
    fn extend_with<F: FnMut() -> T>(&mut self, count: usize, factory: F);
}

impl<T> VecExt<T> for Vec<T> {
    fn pop_front(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.len()).then(|| self.remove(index))
    }

    fn move_item(&mut self, item: &T, index: usize) -> Result<()>
    where
        T: PartialEq + Debug,
    {
        let from = self
            .iter()
            .position(|candidate| candidate == item)
            .ok_or_else(|| Error::NotFound(format!("{item:?}")))?;
        if index >= self.len() {
            return Err(Error::index_out_of_bounds(index, self.len()));
        }
        let moving = self.remove(from);
        self.insert(index, moving);
        Ok(())
    }

    fn push_distinct(&mut self, item: T) -> bool
    where
        T: PartialEq,
    {
        if self.contains(&item) {
            return false;
        }
        self.push(item);
        true
    }

    fn extend_with<F: FnMut() -> T>(&mut self, count: usize, factory: F) {
        self.extend(std::iter::repeat_with(factory).take(count));
    }
}

/// Get-or-insert access for associative containers.
pub trait MapExt<K, V> {
    /// The value under `key`, inserting `factory()` first if it is missing.
    fn get_ensured<F: FnOnce() -> V>(&mut self, key: K, factory: F) -> &mut V;

    /// The value under `key`, inserting `V::default()` first if it is missing.
    fn get_ensured_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_ensured(key, V::default)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> MapExt<K, V> for HashMap<K, V, S> {
    fn get_ensured<F: FnOnce() -> V>(&mut self, key: K, factory: F) -> &mut V {
        self.entry(key).or_insert_with(factory)
    }
}

impl<K: Ord, V> MapExt<K, V> for BTreeMap<K, V> {
    fn get_ensured<F: FnOnce() -> V>(&mut self, key: K, factory: F) -> &mut V {
        self.entry(key).or_insert_with(factory)
    }
}

/// Callbacks driving [`reconcile`].
pub trait Reconciler<S, T> {
    /// The target item currently mirroring `source`, if one exists.
    fn counterpart(&mut self, source: &S) -> Option<T>;

    /// Build a new target item for `source`.
    fn create(&mut self, source: &S) -> T;

    /// Called for a target item no source item maps to, before it is removed.
    fn discard(&mut self, target: &T);

    /// Called when `target` is moved to `index`.
    fn moved(&mut self, target: &T, index: usize);
}

/// Bring the ordered `target` list in line with `source`.
///
/// Missing counterparts are created and appended, unmatched target items are
/// discarded, and the survivors are reordered to follow `source`.
///
/// # Errors
///
/// - `Error::DuplicateItem` if either list holds equal elements.
/// - `Error::InvalidState` if a counterpart reported by the hooks is not in
///   `target`, two source items share a counterpart, or a created item is
///   already in `target`.
///
/// On error `target` is unchanged and neither `discard` nor `moved` has been
/// called.
pub fn reconcile<S, T, R>(source: &[S], target: &mut Vec<T>, hooks: &mut R) -> Result<()>
where
    S: Eq + Hash,
    T: Eq + Hash + Clone,
    R: Reconciler<S, T>,
{
    if !source.iter().all_unique() {
        return Err(Error::DuplicateItem { collection: "source" });
    }
    if !target.iter().all_unique() {
        return Err(Error::DuplicateItem { collection: "target" });
    }

    let present: HashSet<&T> = target.iter().collect();
    let mut mirror: HashMap<&S, T> = HashMap::with_capacity(source.len());
    for item in source {
        if let Some(other) = hooks.counterpart(item) {
            if !present.contains(&other) {
                return Err(Error::invalid_state("counterpart missing from target"));
            }
            mirror.insert(item, other);
        }
    }

    let mut created = Vec::new();
    for item in source {
        if !mirror.contains_key(item) {
            let fresh = hooks.create(item);
            if present.contains(&fresh) {
                return Err(Error::invalid_state("created item is already in target"));
            }
            tracing::trace!(
                index = target.len().saturating_add(created.len()),
                "created counterpart"
            );
            created.push(fresh.clone());
            mirror.insert(item, fresh);
        }
    }

    if !mirror.values().all_unique() {
        return Err(Error::invalid_state("source items share a counterpart"));
    }

    let wanted: HashSet<&T> = mirror.values().collect();
    let (mut kept, stale): (Vec<T>, Vec<T>) =
        target.iter().cloned().partition(|t| wanted.contains(t));
    kept.extend(created.iter().cloned());
    for t in &stale {
        tracing::trace!("discarding unmatched target item");
        hooks.discard(t);
    }
    *target = kept;

    let mut moved = 0_usize;
    for (index, item) in source.iter().enumerate() {
        let expected = mirror
            .get(item)
            .ok_or_else(|| Error::invalid_state("source item lost its counterpart"))?;
        if target.get(index) == Some(expected) {
            continue;
        }
        let from = target
            .iter()
            .position(|t| t == expected)
            .ok_or_else(|| Error::invalid_state("counterpart missing from target"))?;
        let moving = target.remove(from);
        target.insert(index, moving);
        tracing::trace!(from, to = index, "moved target item");
        hooks.moved(expected, index);
        moved = moved.saturating_add(1);
    }

    tracing::debug!(
        created = created.len(),
        discarded = stale.len(),
        moved,
        "reconciled target list"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;

    #[test]
    fn test_pop_front() {
        let mut items = vec![1, 2, 3];
        assert_eq!(items.pop_front(), Some(1));
        assert_eq!(items, vec![2, 3]);

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(empty.pop_front(), None);
    }

    #[test]
    fn test_remove_at() {
        let mut items = vec!['a', 'b', 'c'];
        assert_eq!(items.remove_at(1), Some('b'));
        assert_eq!(items.remove_at(5), None);
        assert_eq!(items, vec!['a', 'c']);
    }

    #[test]
    fn test_move_item() {
        let mut items = vec!["a", "b", "c", "d"];
        assert!(items.move_item(&"d", 1).is_ok());
        assert_eq!(items, vec!["a", "d", "b", "c"]);

        assert!(items.move_item(&"a", 3).is_ok());
        assert_eq!(items, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_move_item_errors_leave_vec_untouched() {
        let mut items = vec![1, 2, 3];
        assert_eq!(items.move_item(&9, 0), Err(Error::NotFound("9".into())));
        assert_eq!(
            items.move_item(&1, 3),
            Err(Error::index_out_of_bounds(3, 3))
        );
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_push_distinct() {
        let mut items = vec![1, 2];
        assert!(items.push_distinct(3));
        assert!(!items.push_distinct(2));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_extend_with() {
        let mut counter = 0;
        let mut items = vec![0];
        items.extend_with(3, || {
            counter += 1;
            counter
        });
        assert_eq!(items, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_get_ensured_hash_map() {
        let mut groups: HashMap<&str, Vec<i32>> = HashMap::new();
        groups.get_ensured_default("odd").push(1);
        groups.get_ensured_default("odd").push(3);
        groups.get_ensured("even", || vec![0]).push(2);

        assert_eq!(groups.get("odd"), Some(&vec![1, 3]));
        assert_eq!(groups.get("even"), Some(&vec![0, 2]));
    }

    #[test]
    fn test_get_ensured_keeps_existing() {
        let mut scores: BTreeMap<&str, i32> = BTreeMap::new();
        scores.insert("a", 5);
        *scores.get_ensured("a", || 100) += 1;
        assert_eq!(scores.get("a"), Some(&6));
    }

    #[derive(Default)]
    struct Upper {
        known: HashSet<String>,
        events: Vec<String>,
    }

    impl Reconciler<&str, String> for Upper {
        fn counterpart(&mut self, source: &&str) -> Option<String> {
            let upper = source.to_uppercase();
            self.known.contains(&upper).then_some(upper)
        }

        fn create(&mut self, source: &&str) -> String {
            self.events.push(format!("create {source}"));
            source.to_uppercase()
        }

        fn discard(&mut self, target: &String) {
            self.events.push(format!("discard {target}"));
        }

        fn moved(&mut self, target: &String, index: usize) {
            self.events.push(format!("move {target} {index}"));
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_reconcile_creates_discards_and_moves() {
        let source = ["a", "b", "c"];
        let mut target = strings(&["C", "X", "A"]);
        let mut hooks = Upper {
            known: target.iter().cloned().collect(),
            ..Upper::default()
        };

        assert!(reconcile(&source, &mut target, &mut hooks).is_ok());
        assert_eq!(target, strings(&["A", "B", "C"]));
        assert_eq!(
            hooks.events,
            strings(&["create b", "discard X", "move A 0", "move B 1"])
        );
    }

    #[test]
    fn test_reconcile_already_in_sync_is_quiet() {
        let source = ["a", "b"];
        let mut target = strings(&["A", "B"]);
        let mut hooks = Upper {
            known: target.iter().cloned().collect(),
            ..Upper::default()
        };

        assert!(reconcile(&source, &mut target, &mut hooks).is_ok());
        assert_eq!(target, strings(&["A", "B"]));
        assert!(hooks.events.is_empty());
    }

    #[test]
    fn test_reconcile_rejects_duplicates() {
        let mut hooks = Upper::default();
        let mut target = Vec::new();
        assert_eq!(
            reconcile(&["a", "a"], &mut target, &mut hooks),
            Err(Error::DuplicateItem { collection: "source" })
        );

        let mut target = strings(&["A", "A"]);
        assert_eq!(
            reconcile(&["a"], &mut target, &mut hooks),
            Err(Error::DuplicateItem { collection: "target" })
        );
    }

    #[test]
    fn test_reconcile_phantom_counterpart_leaves_target_untouched() {
        let source = ["z"];
        let mut target = strings(&["Q", "R"]);
        let mut hooks = Upper {
            known: std::iter::once("Z".to_string()).collect(),
            ..Upper::default()
        };

        let outcome = reconcile(&source, &mut target, &mut hooks);
        assert_eq!(outcome.map_err(|e| e.code()), Err("INVALID_STATE"));
        assert_eq!(target, strings(&["Q", "R"]));
        assert!(hooks.events.is_empty());
    }

    #[test]
    fn test_reconcile_shared_counterpart_is_invalid_state() {
        // "a" and "A" both map to "A".
        let source = ["a", "A"];
        let mut target = strings(&["A", "Q"]);
        let mut hooks = Upper {
            known: std::iter::once("A".to_string()).collect(),
            ..Upper::default()
        };

        assert_eq!(
            reconcile(&source, &mut target, &mut hooks),
            Err(Error::invalid_state("source items share a counterpart"))
        );
        assert_eq!(target, strings(&["A", "Q"]));
        assert!(hooks.events.is_empty());
    }

    #[test]
    fn test_reconcile_created_item_clashing_with_target_is_invalid_state() {
        let source = ["b"];
        let mut target = strings(&["B"]);
        let mut hooks = Upper::default();

        assert_eq!(
            reconcile(&source, &mut target, &mut hooks),
            Err(Error::invalid_state("created item is already in target"))
        );
        assert_eq!(target, strings(&["B"]));
        assert_eq!(hooks.events, strings(&["create b"]));
    }
}
