//! Eager filter, map and fold over slices. Every function allocates a new
//! vector and leaves its input untouched.

pub fn filter<T: Clone>(sequence: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    sequence
        .iter()
        .filter(|&item| predicate(item))
        .cloned()
        .collect()
}

pub fn map<T, U>(sequence: &[T], mapping: impl FnMut(&T) -> U) -> Vec<U> {
    sequence.iter().map(mapping).collect()
}

/// Like [`map`], but `mapping` also receives the position of the element.
pub fn map_indexed<T, U>(sequence: &[T], mut mapping: impl FnMut(&T, usize) -> U) -> Vec<U> {
    sequence
        .iter()
        .enumerate()
        .map(|(i, item)| mapping(item, i))
        .collect()
}

/// Left fold of `sequence` starting from `initial`.
///
/// Note the argument order of `combine`: it receives the current element
/// first and the accumulated value second.
///
/// ```
/// let chunks = [vec![0, 1], vec![2, 3]];
/// let flat = seqkit::reduce(&chunks, |chunk, mut acc: Vec<i32>| {
///     acc.extend_from_slice(chunk);
///     acc
/// }, Vec::new());
/// assert_eq!(flat, vec![0, 1, 2, 3]);
/// ```
pub fn reduce<T, A>(sequence: &[T], mut combine: impl FnMut(&T, A) -> A, initial: A) -> A {
    let mut acc = initial;
    for item in sequence {
        acc = combine(item, acc);
    }
    acc
}

/// Flatten one level of nesting, keeping both inner and outer order.
pub fn concat_slices<T: Clone, S: AsRef<[T]>>(sequences: &[S]) -> Vec<T> {
    reduce(
        sequences,
        |inner, mut acc: Vec<T>| {
            acc.extend_from_slice(inner.as_ref());
            acc
        },
        Vec::new(),
    )
}
