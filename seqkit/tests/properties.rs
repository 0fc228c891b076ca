use proptest::collection::vec;
use proptest::prelude::*;

use seqkit::Keep;

fn keep() -> impl Strategy<Value = Keep> {
    prop_oneof![Just(Keep::First), Just(Keep::Last)]
}

proptest! {
    #[test]
    fn equal_is_false_on_length_mismatch(
        a in vec(any::<i32>(), 0..20),
        b in vec(any::<i32>(), 0..20),
    ) {
        prop_assume!(a.len() != b.len());
        prop_assert!(!seqkit::equal(&a, &b, |_, _| true));
    }

    #[test]
    fn equal_is_reflexive(a in vec(any::<i64>(), 0..20)) {
        prop_assert!(seqkit::equal(&a, &a, |x, y| x == y));
    }

    #[test]
    fn unique_is_idempotent(input in vec(-50i32..50, 0..40), keep in keep()) {
        let same_decade = |a: &i32, b: &i32| a.div_euclid(10) == b.div_euclid(10);
        let once = seqkit::unique_configurable(&input, same_decade, keep);
        let twice = seqkit::unique_configurable(&once, same_decade, keep);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unique_hashed_agrees_with_configurable(input in vec(0u8..10, 0..40), keep in keep()) {
        prop_assert_eq!(
            seqkit::unique_hashed(&input, keep),
            seqkit::unique_configurable(&input, |a, b| a == b, keep)
        );
    }

    #[test]
    fn group_by_partitions_input(input in vec(-5i32..5, 0..40)) {
        let groups = seqkit::group_by(&input, |v| *v);
        for (key, bucket) in &groups {
            prop_assert!(!bucket.is_empty());
            prop_assert!(bucket.iter().all(|v| v == key));
        }
        let mut flattened = seqkit::concat_slices(&seqkit::maps::values(&groups));
        let mut expected = input.clone();
        flattened.sort();
        expected.sort();
        prop_assert_eq!(flattened, expected);
    }

    #[test]
    fn filter_keeps_only_matching(input in vec(any::<i16>(), 0..40)) {
        let result = seqkit::filter(&input, |v| v % 3 == 0);
        prop_assert_eq!(result.len(), seqkit::count_generic(&input, |v| v % 3 == 0));
        prop_assert!(result.iter().all(|v| v % 3 == 0));
    }

    #[test]
    fn make_unique_strings_never_returns_duplicates(
        input in vec("[a1_]{0,3}", 0..30),
        suffix in "[a_1]{0,2}",
    ) {
        match seqkit::make_unique_strings(&input, &suffix) {
            Ok(result) => {
                prop_assert_eq!(result.len(), input.len());
                let distinct = seqkit::unique_hashed(&result, Keep::First);
                prop_assert_eq!(distinct.len(), result.len());
            }
            Err(seqkit::Error::InvalidArgument { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn make_unique_strings_rejects_digit_suffix(
        input in vec("[a1_]{0,3}", 0..30),
        suffix in "[a_]{0,2}[0-9]",
    ) {
        prop_assert!(seqkit::make_unique_strings(&input, &suffix).is_err());
    }
}
