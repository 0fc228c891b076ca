use std::collections::hash_map::Entry;
use std::hash::Hash;

use ahash::{HashMap, HashMapExt};
use strum_macros::{Display, EnumIter, EnumString};

/// Which member of an equivalence class survives deduplication.
///
/// Parses from and displays as `"first"` and `"last"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Keep {
    /// The earliest element of a class is kept; later ones are dropped.
    #[default]
    First,
    /// The latest element of a class replaces the representative, at the
    /// position where the class first appeared.
    Last,
}

/// Remove elements that are equivalent under `eq`, keeping one
/// representative per class according to `keep`.
///
/// Classes appear in the output in the order of their first occurrence in
/// the input. `eq` is called as `eq(representative, candidate)`.
///
/// This performs a linear scan of the result for every input element, so it
/// is quadratic. In exchange it works for element types that are neither
/// hashable nor ordered, and for arbitrary equivalences. See
/// [`unique_hashed`] for the linear version.
pub fn unique_configurable<T: Clone>(
    sequence: &[T],
    mut eq: impl FnMut(&T, &T) -> bool,
    keep: Keep,
) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for item in sequence {
        match result.iter().position(|seen| eq(seen, item)) {
            None => result.push(item.clone()),
            Some(i) => {
                if keep == Keep::Last {
                    result[i] = item.clone();
                }
            }
        }
    }
    tracing::trace!(
        input = sequence.len(),
        output = result.len(),
        %keep,
        "deduplicated sequence"
    );
    result
}

/// Deduplicate, keeping the first element of every class.
pub fn unique<T: Clone>(sequence: &[T], eq: impl FnMut(&T, &T) -> bool) -> Vec<T> {
    unique_configurable(sequence, eq, Keep::First)
}

/// Same as [`unique`].
pub fn unique_first<T: Clone>(sequence: &[T], eq: impl FnMut(&T, &T) -> bool) -> Vec<T> {
    unique_configurable(sequence, eq, Keep::First)
}

/// Deduplicate, keeping the last element of every class in the position of
/// the first.
pub fn unique_last<T: Clone>(sequence: &[T], eq: impl FnMut(&T, &T) -> bool) -> Vec<T> {
    unique_configurable(sequence, eq, Keep::Last)
}

/// Deduplicate under `==` in linear time.
///
/// Produces the same output as `unique_configurable(sequence, |a, b| a == b,
/// keep)`.
pub fn unique_hashed<T: Eq + Hash + Clone>(sequence: &[T], keep: Keep) -> Vec<T> {
    let mut positions: HashMap<&T, usize> = HashMap::with_capacity(sequence.len());
    let mut result = Vec::new();
    for item in sequence {
        match positions.entry(item) {
            Entry::Occupied(entry) => {
                if keep == Keep::Last {
                    result[*entry.get()] = item.clone();
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(result.len());
                result.push(item.clone());
            }
        }
    }
    tracing::trace!(
        input = sequence.len(),
        output = result.len(),
        %keep,
        "deduplicated sequence by hash"
    );
    result
}
