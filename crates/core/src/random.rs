//! Random helpers over an injected generator.
//!
//! There is no process-wide instance; pass a seeded `StdRng` for
//! reproducible results.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Error;
use crate::result::Result;

/// Convenience draws on any [`Rng`].
pub trait RandomExt: Rng + Sized {
    /// A fair coin flip.
    fn next_bool(&mut self) -> bool {
        self.gen_bool(0.5)
    }

    /// A uniformly chosen element of `items`.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptySequence` when `items` is empty.
    fn choose_from<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        random_element(items, self)
    }
}

impl<R: Rng> RandomExt for R {}

/// A uniformly chosen element of `items`.
///
/// # Errors
///
/// Returns `Error::EmptySequence` when `items` is empty.
pub fn random_element<'a, T, R>(items: &'a [T], rng: &mut R) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng).ok_or(Error::EmptySequence {
        operation: "random_element",
    })
}

/// Shuffle `items` in place (Fisher–Yates).
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_next_bool_produces_both_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<bool> = (0..200).map(|_| rng.next_bool()).collect();
        assert!(draws.iter().any(|b| *b));
        assert!(draws.iter().any(|b| !*b));
    }

    #[test]
    fn test_choose_from_returns_member() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = ["red", "green", "blue"];
        let picked = rng.choose_from(&items);
        assert!(picked.map(|p| items.contains(p)).unwrap_or(false));
    }

    #[test]
    fn test_choose_from_empty_fails() {
        let mut rng = StdRng::seed_from_u64(11);
        let empty: [u8; 0] = [];
        assert_eq!(
            rng.choose_from(&empty),
            Err(Error::EmptySequence {
                operation: "random_element"
            })
        );
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_deterministic_for_a_seed() {
        let mut first: Vec<u32> = (0..20).collect();
        let mut second = first.clone();
        shuffle(&mut first, &mut StdRng::seed_from_u64(99));
        shuffle(&mut second, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
