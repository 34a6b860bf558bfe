//! Resolved comparison operands.

use serde_json::Value;
use std::fmt;

/// One side of a comparison pair.
///
/// Paths resolve to `Value` or `Absent`. Custom sort functions produce a
/// raw `Score`, which is paired with `Score(0.0)` so that only its sign
/// matters.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// The path did not lead anywhere.
    Absent,

    /// A resolved value.
    Value(Value),

    /// Raw numeric output of a sort function.
    Score(f64),
}

impl Operand {
    /// The constant a sort function's score is compared against.
    pub const ZERO: Operand = Operand::Score(0.0);

    pub fn kind(&self) -> ValueKind {
        match self {
            Operand::Absent => ValueKind::Absent,
            Operand::Score(_) => ValueKind::Number,
            Operand::Value(value) => ValueKind::of(value),
        }
    }

    /// Numeric view, if this operand is a number or a score.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Score(score) => Some(*score),
            Operand::Value(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<Option<Value>> for Operand {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Operand::Absent, Operand::Value)
    }
}

impl From<f64> for Operand {
    fn from(score: f64) -> Self {
        Operand::Score(score)
    }
}

/// Shape of an operand, ranked for cross-kind ordering.
///
/// Declaration order is the rank among present values. `Null` and
/// `Absent` are placed by [`crate::MissingOrder`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Bool,
    Number,
    String,
    Array,
    Object,
    Null,
    Absent,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Whether this kind counts as missing.
    pub fn is_missing(self) -> bool {
        matches!(self, ValueKind::Null | ValueKind::Absent)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Null => "null",
            ValueKind::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_and_number_share_a_kind() {
        assert_eq!(Operand::Score(1.5).kind(), ValueKind::Number);
        assert_eq!(Operand::Value(json!(3)).kind(), ValueKind::Number);
        assert_eq!(Operand::Value(json!(3)).as_f64(), Some(3.0));
    }

    #[test]
    fn conversions_pick_the_variant() {
        assert_eq!(Operand::from(json!("x")), Operand::Value(json!("x")));
        assert_eq!(Operand::from(Some(json!(1))), Operand::Value(json!(1)));
        assert_eq!(Operand::from(-2.5), Operand::Score(-2.5));
    }

    #[test]
    fn missing_value_becomes_absent() {
        assert_eq!(Operand::from(None::<Value>), Operand::Absent);
        assert!(Operand::Absent.kind().is_missing());
        assert!(ValueKind::Null.is_missing());
        assert!(!ValueKind::Object.is_missing());
    }
}
