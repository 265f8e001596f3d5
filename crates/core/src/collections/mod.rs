//! Collection helpers - shuffling and frequency analysis.

use std::collections::HashMap;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::errors::{Error, Result};

/// Returns a new vector with the input's elements in uniformly random
/// order. Fisher-Yates via `SliceRandom`, so every permutation is
/// equally likely.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(&mut thread_rng());
    shuffled
}

/// Finds the most frequent element in a slice.
///
/// Ties are broken deterministically: among the elements attaining the
/// maximum count, the one appearing first in input order wins. An empty
/// slice is rejected with [`Error::EmptyInput`].
pub fn most_frequent<T>(items: &[T]) -> Result<T>
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let max_count = counts
        .values()
        .copied()
        .max()
        .ok_or_else(|| Error::EmptyInput("cannot take most frequent of an empty slice".to_string()))?;

    items
        .iter()
        .find(|item| counts[*item] == max_count)
        .cloned()
        .ok_or_else(|| Error::EmptyInput("cannot take most frequent of an empty slice".to_string()))
}
