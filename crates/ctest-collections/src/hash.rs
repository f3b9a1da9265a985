//! Slot hashing for [`Value`] keys.
//!
//! Numeric kinds, chars and strings are reduced to an integer seed and then
//! stretched with `seed * 3 + 13` until the seed exceeds the slot limit, then
//! taken modulo the limit. Equal values always land in the same slot; values
//! of different kinds may collide. This is not a general-purpose hash and
//! makes no attempt at avalanche or adversarial resistance.

use crate::error::{CollectionError, Result};
use crate::value::Value;

const STRETCH_MUL: u128 = 3;
const STRETCH_ADD: u128 = 13;

const TRUE_HASH: u128 = 1231;
const FALSE_HASH: u128 = 1237;

/// Map `value` to a slot in `0..limit`.
pub fn hash(value: &Value, limit: usize) -> Result<usize> {
    value.ensure_hashable()?;
    if limit == 0 {
        return Err(CollectionError::EmptyTable);
    }

    let slot = match value {
        Value::UnsignedInteger(n) => stretch(u128::from(*n), limit),
        Value::Integer(n) => stretch(signed_seed(*n), limit),
        Value::Char(c) => stretch(u128::from(u32::from(*c)), limit),
        Value::String(s) => stretch(s.bytes().map(u128::from).sum(), limit),
        Value::Bool(b) => {
            let seed = if *b { TRUE_HASH } else { FALSE_HASH };
            (seed % limit as u128) as usize
        }
        other => {
            return Err(CollectionError::NotHashable { kind: other.kind() });
        }
    };
    Ok(slot)
}

/// Negative integers are doubled and negated before stretching.
fn signed_seed(n: i64) -> u128 {
    if n < 0 {
        (-(i128::from(n)) * 2) as u128
    } else {
        n as u128
    }
}

fn stretch(seed: u128, limit: usize) -> usize {
    let limit = limit as u128;
    let mut seed = seed * STRETCH_MUL + STRETCH_ADD;
    while seed <= limit {
        seed = seed * STRETCH_MUL + STRETCH_ADD;
    }
    (seed % limit) as usize
}
