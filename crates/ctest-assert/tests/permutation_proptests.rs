//! Property-based tests for the permutation checks.

use ctest_assert::permutation::{
    correspond, has_partial_permutation, is_partial_permutation, is_permutation,
    not_has_partial_permutation, not_is_partial_permutation, not_permutation,
};
use ctest_assert::Value;
use proptest::prelude::*;

// ============================================================================
//  Strategies
// ============================================================================

/// Values from a small alphabet so duplicates and near-misses are common.
fn sequence(max_len: usize) -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec((0u64..5).prop_map(Value::UnsignedInteger), 0..=max_len)
}

/// A sequence together with a shuffled copy of it.
fn sequence_and_shuffle(max_len: usize) -> impl Strategy<Value = (Vec<Value>, Vec<Value>)> {
    sequence(max_len).prop_flat_map(|seq| {
        let shuffled = Just(seq.clone()).prop_shuffle();
        (Just(seq), shuffled)
    })
}

proptest! {
    #[test]
    fn permutation_is_symmetric(a in sequence(12), b in sequence(12)) {
        prop_assert_eq!(
            is_permutation(&a, &b).unwrap().holds,
            is_permutation(&b, &a).unwrap().holds
        );
    }

    #[test]
    fn sequence_is_permutation_of_itself(a in sequence(20)) {
        let verdict = is_permutation(&a, &a).unwrap();
        prop_assert!(verdict.holds);
        let identity: Vec<Option<usize>> = (0..a.len()).map(Some).collect();
        prop_assert_eq!(verdict.correspondence.relative_indices, identity);
    }

    #[test]
    fn shuffle_is_permutation((a, shuffled) in sequence_and_shuffle(20)) {
        prop_assert!(is_permutation(&a, &shuffled).unwrap().holds);
        prop_assert!(!not_permutation(&a, &shuffled).unwrap());
    }

    #[test]
    fn permutation_implies_partial(a in sequence(12), b in sequence(12)) {
        if is_permutation(&a, &b).unwrap().holds {
            prop_assert!(is_partial_permutation(&a, &b).unwrap().holds);
            prop_assert!(has_partial_permutation(&a, &b).unwrap().holds);
        }
    }

    #[test]
    fn prefix_is_partial_permutation((a, shuffled) in sequence_and_shuffle(20), cut in 0usize..=20) {
        let cut = cut.min(shuffled.len());
        let prefix = &shuffled[..cut];
        prop_assert!(is_partial_permutation(prefix, &a).unwrap().holds);
        prop_assert!(has_partial_permutation(&a, prefix).unwrap().holds);
    }

    #[test]
    fn negations_agree(a in sequence(12), b in sequence(12)) {
        prop_assert_eq!(not_permutation(&a, &b).unwrap(), !is_permutation(&a, &b).unwrap().holds);
        prop_assert_eq!(
            not_is_partial_permutation(&a, &b).unwrap(),
            !is_partial_permutation(&a, &b).unwrap().holds
        );
        prop_assert_eq!(
            not_has_partial_permutation(&a, &b).unwrap(),
            !has_partial_permutation(&a, &b).unwrap().holds
        );
    }

    /// Matched positions point at equal values and are never reused.
    #[test]
    fn correspondence_is_injective_and_value_preserving(a in sequence(15), b in sequence(15)) {
        let c = correspond(&a, &b).unwrap();
        prop_assert_eq!(c.relative_indices.len(), a.len());

        let mut used = vec![false; b.len()];
        for (i, rel) in c.relative_indices.iter().enumerate() {
            if let Some(j) = *rel {
                prop_assert_eq!(&a[i], &b[j]);
                prop_assert!(!used[j]);
                used[j] = true;
            }
        }
        for &j in &c.unmatched_reference {
            prop_assert!(!used[j]);
            used[j] = true;
        }
        prop_assert!(used.iter().all(|&u| u));
    }
}
