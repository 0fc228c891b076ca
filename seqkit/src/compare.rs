/// Compare two slices element by element with `predicate`.
///
/// The slices are equal when they have the same length and `predicate`
/// holds for every pair at the same position. Comparison stops at the first
/// pair that fails. The element types may differ, and two empty slices are
/// always equal.
pub fn equal<A, B>(a: &[A], b: &[B], mut predicate: impl FnMut(&A, &B) -> bool) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(a, b)| predicate(a, b))
}
