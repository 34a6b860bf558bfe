//! Three-way ordering of operands and operand-pair sequences.
//!
//! The order is total over everything a path can resolve to:
//!
//! - numbers compare numerically, and a NaN on either side ties;
//! - strings compare by code point, booleans as `false < true`;
//! - arrays and objects compare element-wise, objects by sorted key;
//! - values of different kinds fall back to [`ValueKind`] rank;
//! - `null` and absent operands are grouped at one end, chosen by
//!   [`MissingOrder`].

use crate::operand::{Operand, ValueKind};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Where missing operands (`null` or absent) sort relative to present ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingOrder {
    /// Missing operands sort before every present value.
    First,

    /// Missing operands sort after every present value.
    #[default]
    Last,
}

impl std::fmt::Display for MissingOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
        }
    }
}

impl std::str::FromStr for MissingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            _ => Err(format!("unknown missing order: {s}")),
        }
    }
}

/// Options consumed by the comparer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompareOptions {
    pub missing: MissingOrder,
}

/// Compare one pair of operands.
pub fn compare(a: &Operand, b: &Operand, options: &CompareOptions) -> Ordering {
    let (kind_a, kind_b) = (a.kind(), b.kind());
    if kind_a.is_missing() || kind_b.is_missing() {
        return compare_missing(kind_a, kind_b, options.missing);
    }

    match (a, b) {
        (Operand::Value(x), Operand::Value(y)) => compare_values(x, y, options),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => compare_f64(x, y),
            _ => kind_a.cmp(&kind_b),
        },
    }
}

/// Compare a flat sequence of operand pairs `[l1, r1, l2, r2, ...]`.
///
/// Returns the first non-`Equal` pair result, or `Equal` when every pair
/// ties. An empty sequence is `Equal`; a trailing unpaired operand is
/// ignored.
pub fn compare_pairs(operands: &[Operand], options: &CompareOptions) -> Ordering {
    operands
        .chunks_exact(2)
        .map(|pair| compare(&pair[0], &pair[1], options))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compare two resolved values.
pub fn compare_values(a: &Value, b: &Value, options: &CompareOptions) -> Ordering {
    match (a, b) {
        (Value::Null, _) | (_, Value::Null) => {
            compare_missing(ValueKind::of(a), ValueKind::of(b), options.missing)
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(xs), Value::Array(ys)) => {
            for (x, y) in xs.iter().zip(ys) {
                let ordering = compare_values(x, y, options);
                if ordering.is_ne() {
                    return ordering;
                }
            }
            xs.len().cmp(&ys.len())
        }
        (Value::Object(xs), Value::Object(ys)) => {
            let mut left: Vec<_> = xs.iter().collect();
            let mut right: Vec<_> = ys.iter().collect();
            left.sort_by(|l, r| l.0.cmp(r.0));
            right.sort_by(|l, r| l.0.cmp(r.0));

            for ((kx, vx), (ky, vy)) in left.iter().zip(&right) {
                let ordering = kx.cmp(ky).then_with(|| compare_values(vx, vy, options));
                if ordering.is_ne() {
                    return ordering;
                }
            }
            left.len().cmp(&right.len())
        }
        _ => ValueKind::of(a).cmp(&ValueKind::of(b)),
    }
}

/// Map an ordering to the signed indicator `-1`, `0` or `1`.
pub fn sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

fn compare_missing(a: ValueKind, b: ValueKind, missing: MissingOrder) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => a.cmp(&b),
        (false, false) => Ordering::Equal,
        (true, false) => match missing {
            MissingOrder::First => Ordering::Less,
            MissingOrder::Last => Ordering::Greater,
        },
        (false, true) => match missing {
            MissingOrder::First => Ordering::Greater,
            MissingOrder::Last => Ordering::Less,
        },
    }
}

// Exact integer comparison first; f64 only when a side is fractional.
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.cmp(&y);
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => compare_f64(x, y),
        _ => Ordering::Equal,
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
