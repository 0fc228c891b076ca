use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

/// Bucket the elements of `sequence` by the key `key_fn` computes for them.
///
/// Each bucket keeps its elements in input order. The order of the buckets
/// themselves is unspecified.
pub fn group_by<T: Clone, K: Eq + Hash>(
    sequence: &[T],
    mut key_fn: impl FnMut(&T) -> K,
) -> HashMap<K, Vec<T>> {
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in sequence {
        groups.entry(key_fn(item)).or_default().push(item.clone());
    }
    tracing::trace!(
        input = sequence.len(),
        groups = groups.len(),
        "grouped sequence"
    );
    groups
}
