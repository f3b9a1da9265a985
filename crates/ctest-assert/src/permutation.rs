//! Permutation-family checks.
//!
//! Every check builds a [`CounterDict`] over one sequence (the "pool") and,
//! for each element of the other sequence, pops the next unused position of
//! an equal pool element. The popped positions form the relative index array
//! reported in diagnostics.
//!
//! Empty sequences are the empty multiset: `[]` is a permutation of `[]` and
//! a partial permutation of anything.

use ctest_collections::{CounterDict, Value};
use tracing::debug;

use crate::error::Result;

/// Element-level matching of a target sequence against a reference pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correspondence {
    /// For each target position, the reference position it was matched to,
    /// or `None` when no equal reference element was left.
    pub relative_indices: Vec<Option<usize>>,
    /// Reference positions no target element consumed, ascending.
    pub unmatched_reference: Vec<usize>,
}

impl Correspondence {
    /// Every target element found a partner.
    pub fn all_matched(&self) -> bool {
        self.relative_indices.iter().all(Option::is_some)
    }

    /// Every target element found a partner and nothing was left over.
    pub fn is_exact(&self) -> bool {
        self.all_matched() && self.unmatched_reference.is_empty()
    }

    /// Target positions without a partner.
    pub fn unmatched_target(&self) -> Vec<usize> {
        self.relative_indices
            .iter()
            .enumerate()
            .filter(|(_, rel)| rel.is_none())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Outcome of a non-negated check, with the full correspondence behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub holds: bool,
    pub correspondence: Correspondence,
}

/// Match every element of `target` against `reference` without stopping at
/// the first miss.
pub fn correspond(target: &[Value], reference: &[Value]) -> Result<Correspondence> {
    let mut counter = CounterDict::count_elements(reference)?;
    let relative_indices = target
        .iter()
        .map(|value| counter.try_pop_next_index(value))
        .collect::<ctest_collections::Result<Vec<_>>>()?;

    Ok(Correspondence {
        relative_indices,
        unmatched_reference: counter.remaining_indices(),
    })
}

/// `target` and `reference` hold the same multiset of values.
pub fn is_permutation(target: &[Value], reference: &[Value]) -> Result<Verdict> {
    let correspondence = correspond(target, reference)?;
    let holds = correspondence.is_exact();
    debug!(
        target_len = target.len(),
        reference_len = reference.len(),
        holds,
        "is_permutation"
    );
    Ok(Verdict {
        holds,
        correspondence,
    })
}

/// Every element of `target` (with multiplicity) has a partner in
/// `reference`; `reference` may have leftovers.
pub fn is_partial_permutation(target: &[Value], reference: &[Value]) -> Result<Verdict> {
    let correspondence = correspond(target, reference)?;
    let holds = correspondence.all_matched();
    debug!(
        target_len = target.len(),
        reference_len = reference.len(),
        holds,
        "is_partial_permutation"
    );
    Ok(Verdict {
        holds,
        correspondence,
    })
}

/// `reference` is a partial permutation drawn from `target`.
///
/// The returned correspondence is from the reference's point of view: one
/// relative index into `target` per reference element.
pub fn has_partial_permutation(target: &[Value], reference: &[Value]) -> Result<Verdict> {
    let correspondence = correspond(reference, target)?;
    let holds = correspondence.all_matched();
    debug!(
        target_len = target.len(),
        reference_len = reference.len(),
        holds,
        "has_partial_permutation"
    );
    Ok(Verdict {
        holds,
        correspondence,
    })
}

/// Negation of [`is_permutation`]; returns as soon as the answer is known.
pub fn not_permutation(target: &[Value], reference: &[Value]) -> Result<bool> {
    let (missed, counter) = scan_until_miss(target, reference)?;
    Ok(missed || !counter.is_drained())
}

/// Negation of [`is_partial_permutation`]; stops at the first miss.
pub fn not_is_partial_permutation(target: &[Value], reference: &[Value]) -> Result<bool> {
    let (missed, _) = scan_until_miss(target, reference)?;
    Ok(missed)
}

/// Negation of [`has_partial_permutation`]; stops at the first miss.
pub fn not_has_partial_permutation(target: &[Value], reference: &[Value]) -> Result<bool> {
    let (missed, _) = scan_until_miss(reference, target)?;
    Ok(missed)
}

/// Consume `pool` with the elements of `matched` until one finds no partner.
///
/// Every element of `matched` is checked for hashability up front, so an
/// early exit never hides an error the full scan would report.
fn scan_until_miss(matched: &[Value], pool: &[Value]) -> Result<(bool, CounterDict)> {
    let mut counter = CounterDict::count_elements(pool)?;
    for value in matched {
        value.ensure_hashable()?;
    }
    for (position, value) in matched.iter().enumerate() {
        if counter.try_pop_next_index(value)?.is_none() {
            debug!(position, value = %value, "no correspondence, stopping early");
            return Ok((true, counter));
        }
    }
    Ok((false, counter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(items: &[i64]) -> Vec<Value> {
        items.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_correspond_reports_sentinel_and_leftovers() {
        let c = correspond(&ints(&[1, 2, 2]), &ints(&[1, 1, 2])).unwrap();
        assert_eq!(c.relative_indices, vec![Some(0), Some(2), None]);
        assert_eq!(c.unmatched_reference, vec![1]);
        assert_eq!(c.unmatched_target(), vec![2]);
        assert!(!c.all_matched());
    }

    #[test]
    fn test_duplicates_match_in_ascending_reference_order() {
        let c = correspond(&ints(&[5, 5, 5]), &ints(&[5, 0, 5, 5])).unwrap();
        assert_eq!(c.relative_indices, vec![Some(0), Some(2), Some(3)]);
        assert_eq!(c.unmatched_reference, vec![1]);
    }

    #[test]
    fn test_not_permutation_detects_leftovers() {
        assert!(not_permutation(&ints(&[1, 2]), &ints(&[1, 2, 3])).unwrap());
        assert!(!not_permutation(&ints(&[3, 1, 2]), &ints(&[1, 2, 3])).unwrap());
    }

    #[test]
    fn test_negations_reject_unhashable_after_first_miss() {
        let target = vec![Value::from(9i64), Value::FloatingPoint(1.5)];
        let reference = ints(&[1]);
        assert!(is_partial_permutation(&target, &reference).is_err());
        assert!(not_is_partial_permutation(&target, &reference).is_err());
        assert!(not_permutation(&target, &reference).is_err());
        assert!(has_partial_permutation(&reference, &target).is_err());
        assert!(not_has_partial_permutation(&reference, &target).is_err());
    }

    #[test]
    fn test_unhashable_elements_are_errors() {
        let target = vec![Value::FloatingPoint(1.0)];
        assert!(is_permutation(&target, &target).is_err());
        assert!(not_is_partial_permutation(&target, &ints(&[1])).is_err());
    }
}
