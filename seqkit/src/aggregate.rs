/// True if at least one value is true. False for an empty slice.
pub fn any(values: &[bool]) -> bool {
    values.iter().any(|&v| v)
}

/// True if every value is true. True for an empty slice.
pub fn all(values: &[bool]) -> bool {
    values.iter().all(|&v| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any() {
        assert!(!any(&[false, false, false, false]));
        assert!(any(&[false, true, false, false]));
        assert!(!any(&[]));
    }

    #[test]
    fn test_all() {
        assert!(!all(&[true, true, false, true]));
        assert!(all(&[true, true, true, true]));
        assert!(all(&[]));
    }
}
