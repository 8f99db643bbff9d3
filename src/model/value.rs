use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A scalar form value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Str(String),
}

// Manual implementation to handle f64
impl Eq for Value {}

// Manual implementation to handle f64 by hashing its bits
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => n.to_bits().hash(state),
            Value::Str(s) => s.hash(state),
        }
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                // Exact integers print without a fraction; larger ones as full digits.
                if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl Value {
    /// An empty string counts as "no value" when seeding form fields.
    pub fn is_blank(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Converts a JSON scalar. Objects, arrays and `null` have no form representation.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Bool(b) => Some(Value::Bool(*b)),
            JsonValue::Number(n) => n.as_f64().map(Value::Number),
            JsonValue::String(s) => Some(Value::Str(s.clone())),
            JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// The value of a form item: a single scalar or a list for array-typed items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    Scalar(Value),
    List(Vec<Value>),
}

impl ItemValue {
    pub fn is_blank(&self) -> bool {
        match self {
            ItemValue::Scalar(v) => v.is_blank(),
            ItemValue::List(_) => false,
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            ItemValue::Scalar(v) => Some(v),
            ItemValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            ItemValue::List(values) => Some(values),
            ItemValue::Scalar(_) => None,
        }
    }
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemValue::Scalar(v) => write!(f, "{}", v),
            ItemValue::List(values) => {
                write!(f, "{}", itertools::join(values.iter(), ","))
            }
        }
    }
}

impl From<Value> for ItemValue {
    fn from(value: Value) -> Self {
        ItemValue::Scalar(value)
    }
}

impl From<&str> for ItemValue {
    fn from(value: &str) -> Self {
        ItemValue::Scalar(value.into())
    }
}

impl From<Vec<Value>> for ItemValue {
    fn from(values: Vec<Value>) -> Self {
        ItemValue::List(values)
    }
}
