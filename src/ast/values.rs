use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A scalar operand in a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
}

/// Datatype tag of an `IN` / `NOT IN` value list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
}

impl Scalar {
    /// Lift a JSON value into a scalar. Arrays, objects and null yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::String(s.clone())),
            Value::Number(n) => Some(Scalar::Number(n.clone())),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::String(_) => ScalarKind::String,
            Scalar::Number(_) => ScalarKind::Number,
            Scalar::Bool(_) => ScalarKind::Boolean,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Scalar::String(s) => Value::String(s.clone()),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::Bool(b) => Value::Bool(*b),
        }
    }
}

impl ScalarKind {
    /// Kind of a JSON value, if it is one of the three recognized scalars.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Some(ScalarKind::String),
            Value::Number(_) => Some(ScalarKind::Number),
            Value::Bool(_) => Some(ScalarKind::Boolean),
            _ => None,
        }
    }
}

/// Renders the SQL literal: strings single-quoted, numbers and booleans verbatim.
impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "'{}'", s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarKind::String => write!(f, "string"),
            ScalarKind::Number => write!(f, "number"),
            ScalarKind::Boolean => write!(f, "boolean"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Number(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Number(v.into())
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_literal() {
        assert_eq!(Scalar::from("astra").to_string(), "'astra'");
        assert_eq!(Scalar::from(10).to_string(), "10");
        assert_eq!(Scalar::from(true).to_string(), "true");
        assert_eq!(Scalar::from_json(&json!(2.5)).unwrap().to_string(), "2.5");
    }

    #[test]
    fn test_scalar_from_json_rejects_composites() {
        assert!(Scalar::from_json(&json!(null)).is_none());
        assert!(Scalar::from_json(&json!([1])).is_none());
        assert!(Scalar::from_json(&json!({"a": 1})).is_none());
        assert_eq!(ScalarKind::of(&json!(false)), Some(ScalarKind::Boolean));
    }
}
