//! Pull the keys or values out of a map.
//!
//! Both functions accept anything that iterates as `(&K, &V)` pairs, so a
//! reference to a std `HashMap`, an `ahash::HashMap` or a `BTreeMap` all
//! work. The output follows the map's own iteration order, which is
//! unspecified for hash maps.

pub fn keys<'a, K: Clone + 'a, V: 'a>(map: impl IntoIterator<Item = (&'a K, &'a V)>) -> Vec<K> {
    map.into_iter().map(|(k, _)| k.clone()).collect()
}

pub fn values<'a, K: 'a, V: Clone + 'a>(map: impl IntoIterator<Item = (&'a K, &'a V)>) -> Vec<V> {
    map.into_iter().map(|(_, v)| v.clone()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ahash::HashMap;

    use super::*;

    fn sample() -> HashMap<&'static str, i32> {
        [("a", 0), ("b", 2), ("c", -3)].into_iter().collect()
    }

    #[test]
    fn test_keys() {
        let mut result = keys(&sample());
        result.sort();
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_values() {
        let mut result = values(&sample());
        result.sort();
        assert_eq!(result, vec![-3, 0, 2]);
    }

    #[test]
    fn test_btree_order() {
        let map: BTreeMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(keys(&map), vec![1, 2, 3]);
        assert_eq!(values(&map), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_empty() {
        let map: HashMap<String, String> = HashMap::default();
        assert!(keys(&map).is_empty());
        assert!(values(&map).is_empty());
    }
}
