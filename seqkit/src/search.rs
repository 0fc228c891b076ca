//! Predicate search over index ranges and slices.
//!
//! The index based functions take a `limit` and a predicate over indices.
//! They do no bounds checking of their own: the predicate is expected to
//! index into the backing data, so a `limit` past its end panics there.
//!
//! ```
//! let names = ["Sam", "Frodo", "Precious"];
//! let idx = seqkit::find_index(names.len(), |i| names[i] == "Precious");
//! assert_eq!(idx, Some(2));
//! ```

/// Returns the first index in `0..limit` for which `predicate` holds.
pub fn find_index(limit: usize, mut predicate: impl FnMut(usize) -> bool) -> Option<usize> {
    (0..limit).find(|&i| predicate(i))
}

/// Returns the position of the first element for which `predicate` holds.
pub fn find_index_generic<T>(
    sequence: &[T],
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<usize> {
    find_index(sequence.len(), |i| predicate(&sequence[i]))
}

pub fn contains(limit: usize, predicate: impl FnMut(usize) -> bool) -> bool {
    find_index(limit, predicate).is_some()
}

pub fn contains_generic<T>(sequence: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    find_index_generic(sequence, predicate).is_some()
}

/// Counts the indices in `0..limit` for which `predicate` holds.
///
/// Unlike [`find_index`] this always visits the whole range.
pub fn count(limit: usize, mut predicate: impl FnMut(usize) -> bool) -> usize {
    let mut count = 0;
    for i in 0..limit {
        if predicate(i) {
            count += 1;
        }
    }
    count
}

pub fn count_generic<T>(sequence: &[T], mut predicate: impl FnMut(&T) -> bool) -> usize {
    count(sequence.len(), |i| predicate(&sequence[i]))
}
