//! Array assertions backed by the permutation checks and [`Set`].
//!
//! Every assertion converts its inputs to [`Value`]s, builds whatever
//! counter or set it needs, and drops it before returning. The verdict is
//! recorded on the supplied [`AssertContext`].

use std::io::Write;

use ctest_collections::{Set, Value};

use crate::context::{AssertContext, AssertOutcome};
use crate::diagnostic::{render_correspondence, render_highlighted, Labeled};
use crate::error::Result;
use crate::permutation::{self, correspond};

const TARGET: &str = "target";
const REFERENCE: &str = "reference";

fn to_values<T: Clone + Into<Value>>(items: &[T]) -> Vec<Value> {
    items.iter().cloned().map(Into::into).collect()
}

/// Target-major rendering: target elements looked up in the reference.
fn render_target_in_reference(target: &[Value], reference: &[Value]) -> Result<String> {
    let correspondence = correspond(target, reference)?;
    Ok(render_correspondence(
        Labeled::new(TARGET, target),
        Labeled::new(REFERENCE, reference),
        &correspondence,
    ))
}

/// Reference-major rendering: reference elements looked up in the target.
fn render_reference_in_target(target: &[Value], reference: &[Value]) -> Result<String> {
    let correspondence = correspond(reference, target)?;
    Ok(render_correspondence(
        Labeled::new(REFERENCE, reference),
        Labeled::new(TARGET, target),
        &correspondence,
    ))
}

pub fn assert_array_is_permutation<T, W>(
    ctx: &mut AssertContext<W>,
    target: &[T],
    reference: &[T],
) -> Result<AssertOutcome>
where
    T: Clone + Into<Value>,
    W: Write,
{
    let target = to_values(target);
    let reference = to_values(reference);
    let verdict = permutation::is_permutation(&target, &reference)?;
    ctx.record(
        "assert_array_is_permutation",
        verdict.holds,
        "target array is not a permutation of reference array",
        || {
            Ok(render_correspondence(
                Labeled::new(TARGET, &target),
                Labeled::new(REFERENCE, &reference),
                &verdict.correspondence,
            ))
        },
    )
}

pub fn assert_array_not_permutation<T, W>(
    ctx: &mut AssertContext<W>,
    target: &[T],
    reference: &[T],
) -> Result<AssertOutcome>
where
    T: Clone + Into<Value>,
    W: Write,
{
    let target = to_values(target);
    let reference = to_values(reference);
    let holds = permutation::not_permutation(&target, &reference)?;
    ctx.record(
        "assert_array_not_permutation",
        holds,
        "target array is a permutation of reference array",
        || render_target_in_reference(&target, &reference),
    )
}

pub fn assert_array_is_partial_permutation<T, W>(
    ctx: &mut AssertContext<W>,
    target: &[T],
    reference: &[T],
) -> Result<AssertOutcome>
where
    T: Clone + Into<Value>,
    W: Write,
{
    let target = to_values(target);
    let reference = to_values(reference);
    let verdict = permutation::is_partial_permutation(&target, &reference)?;
    ctx.record(
        "assert_array_is_partial_permutation",
        verdict.holds,
        "target array is not a partial permutation of reference array",
        || {
            Ok(render_correspondence(
                Labeled::new(TARGET, &target),
                Labeled::new(REFERENCE, &reference),
                &verdict.correspondence,
            ))
        },
    )
}

pub fn assert_array_not_is_partial_permutation<T, W>(
    ctx: &mut AssertContext<W>,
    target: &[T],
    reference: &[T],
) -> Result<AssertOutcome>
where
    T: Clone + Into<Value>,
    W: Write,
{
    let target = to_values(target);
    let reference = to_values(reference);
    let holds = permutation::not_is_partial_permutation(&target, &reference)?;
    ctx.record(
        "assert_array_not_is_partial_permutation",
        holds,
        "target array is a partial permutation of reference array",
        || render_target_in_reference(&target, &reference),
    )
}

pub fn assert_array_has_partial_permutation<T, W>(
    ctx: &mut AssertContext<W>,
    target: &[T],
    reference: &[T],
) -> Result<AssertOutcome>
where
    T: Clone + Into<Value>,
    W: Write,
{
    let target = to_values(target);
    let reference = to_values(reference);
    let verdict = permutation::has_partial_permutation(&target, &reference)?;
    ctx.record(
        "assert_array_has_partial_permutation",
        verdict.holds,
        "reference array is not a partial permutation of target array",
        || {
            Ok(render_correspondence(
                Labeled::new(REFERENCE, &reference),
                Labeled::new(TARGET, &target),
                &verdict.correspondence,
            ))
        },
    )
}

pub fn assert_array_not_has_partial_permutation<T, W>(
    ctx: &mut AssertContext<W>,
    target: &[T],
    reference: &[T],
) -> Result<AssertOutcome>
where
    T: Clone + Into<Value>,
    W: Write,
{
    let target = to_values(target);
    let reference = to_values(reference);
    let holds = permutation::not_has_partial_permutation(&target, &reference)?;
    ctx.record(
        "assert_array_not_has_partial_permutation",
        holds,
        "reference array is a partial permutation of target array",
        || render_reference_in_target(&target, &reference),
    )
}

/// Every distinct element of `target` appears somewhere in `reference`.
///
/// Multiplicity is ignored; use the permutation assertions when it matters.
pub fn assert_array_is_subset<T, W>(
    ctx: &mut AssertContext<W>,
    target: &[T],
    reference: &[T],
) -> Result<AssertOutcome>
where
    T: Clone + Into<Value>,
    W: Write,
{
    let target = to_values(target);
    let reference = to_values(reference);
    let target_set = Set::from_values(&target)?;
    let reference_set = Set::from_values(&reference)?;
    let holds = target_set.is_subset(&reference_set)?;
    ctx.record(
        "assert_array_is_subset",
        holds,
        "target array has elements missing from reference array",
        || {
            let missing = missing_positions(&target, &reference_set)?;
            Ok(render_highlighted(Labeled::new(TARGET, &target), &missing))
        },
    )
}

/// `target` and `reference` contain the same distinct elements.
pub fn assert_array_same_elements<T, W>(
    ctx: &mut AssertContext<W>,
    target: &[T],
    reference: &[T],
) -> Result<AssertOutcome>
where
    T: Clone + Into<Value>,
    W: Write,
{
    let target = to_values(target);
    let reference = to_values(reference);
    let target_set = Set::from_values(&target)?;
    let reference_set = Set::from_values(&reference)?;
    let holds = target_set.set_eq(&reference_set)?;
    ctx.record(
        "assert_array_same_elements",
        holds,
        "target and reference arrays hold different elements",
        || {
            let missing_from_reference = missing_positions(&target, &reference_set)?;
            let missing_from_target = missing_positions(&reference, &target_set)?;
            let mut text =
                render_highlighted(Labeled::new(TARGET, &target), &missing_from_reference);
            text.push_str(&render_highlighted(
                Labeled::new(REFERENCE, &reference),
                &missing_from_target,
            ));
            Ok(text)
        },
    )
}

/// Structural equality of two values of any kind.
pub fn assert_value_equal<T, W>(
    ctx: &mut AssertContext<W>,
    target: T,
    reference: T,
) -> Result<AssertOutcome>
where
    T: Into<Value>,
    W: Write,
{
    let target = target.into();
    let reference = reference.into();
    ctx.record(
        "assert_value_equal",
        target == reference,
        "target value differs from reference value",
        || Ok(format!("  {TARGET}:    {target}\n  {REFERENCE}: {reference}")),
    )
}

/// Positions of `values` whose element is not in `set`.
fn missing_positions(values: &[Value], set: &Set) -> Result<Vec<usize>> {
    let mut missing = Vec::new();
    for (i, value) in values.iter().enumerate() {
        if !set.contains(value)? {
            missing.push(i);
        }
    }
    Ok(missing)
}
