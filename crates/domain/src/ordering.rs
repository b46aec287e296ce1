//! Natural ordering of JSON values.
//!
//! - numbers compare numerically (integers exactly, also against floats)
//! - strings compare by Unicode code point
//! - booleans order `false < true`
//! - arrays compare lexicographically, element by element
//!
//! Values of different kinds, `null`s and objects have no ordering.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::kind::JsonKind;

/// Two values that cannot be ordered against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incomparable {
    /// Kind of the left-hand value.
    pub left: JsonKind,
    /// Kind of the right-hand value.
    pub right: JsonKind,
}

/// Compares two JSON values by their natural ordering.
///
/// # Errors
///
/// Returns [`Incomparable`] if the values (or, for arrays, the first pair of
/// elements that has to be compared) are of different kinds or of a kind
/// without an ordering.
pub fn compare_values(left: &Value, right: &Value) -> Result<Ordering, Incomparable> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => Ok(compare_numbers(a, b)),
        (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
        (Value::Array(a), Value::Array(b)) => compare_arrays(a, b),
        _ => Err(Incomparable {
            left: JsonKind::of(left),
            right: JsonKind::of(right),
        }),
    }
}

fn compare_arrays(left: &[Value], right: &[Value]) -> Result<Ordering, Incomparable> {
    for (a, b) in left.iter().zip(right) {
        match compare_values(a, b)? {
            Ordering::Equal => {}
            ordering => return Ok(ordering),
        }
    }
    Ok(left.len().cmp(&right.len()))
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    match (as_integer(left), as_integer(right)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(a), None) => right.as_f64().map_or(Ordering::Equal, |b| compare_integer_float(a, b)),
        (None, Some(b)) => left
            .as_f64()
            .map_or(Ordering::Equal, |a| compare_integer_float(b, a).reverse()),
        (None, None) => match (left.as_f64(), right.as_f64()) {
            // JSON has no NaN, so partial_cmp only fails on unrepresentable input
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

/// Compares an integer against a finite float without rounding the integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn compare_integer_float(integer: i128, float: f64) -> Ordering {
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0; // 2^127

    if float >= LIMIT {
        return Ordering::Less;
    }
    if float < -LIMIT {
        return Ordering::Greater;
    }

    // in range and integral, so the cast is exact
    let whole = float.trunc();
    match integer.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

fn as_integer(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

/// Orders any two JSON values, including ones [`compare_values`] rejects.
///
/// Agrees with [`compare_values`] wherever that succeeds. Values of different
/// kinds are ordered by kind (see [`JsonKind::rank`]); `null`s compare equal
/// to each other, as do objects. The result is a total order, so it is safe
/// to hand to a sort even when the data holds incomparable keys.
#[must_use]
pub fn total_order(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => a
            .iter()
            .zip(b)
            .map(|(x, y)| total_order(x, y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        _ => JsonKind::of(left).rank().cmp(&JsonKind::of(right).rank()),
    }
}
