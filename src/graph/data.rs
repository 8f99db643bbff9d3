use super::AmfGraph;
use crate::classifier::{LiteralKind, datatype_of, literal_kind};
use crate::model::{ItemValue, Value};
use crate::vocab::{data, rdfs, shapes};
use serde_json::Value as JsonValue;

impl AmfGraph {
    /// Decodes a `data:` literal node: a `data:Scalar`, a `data:Array` of
    /// scalars, or a file shape's declared file types.
    ///
    /// Returns `None` for any other node.
    pub fn data_value(&self, node: &JsonValue) -> Option<ItemValue> {
        let node = match node {
            JsonValue::Array(items) => items.first()?,
            other => other,
        };
        if self.has_type(node, data::SCALAR) {
            self.data_scalar(node).map(ItemValue::Scalar)
        } else if self.has_type(node, data::ARRAY) {
            self.data_array(node).map(ItemValue::List)
        } else if self.has_type(node, shapes::FILE_SHAPE) {
            let types = self
                .values(node, shapes::FILE_TYPE)
                .into_iter()
                .filter_map(Value::from_json)
                .collect();
            Some(ItemValue::List(types))
        } else {
            None
        }
    }

    /// A `data:Scalar`'s value, coerced by its `sh:datatype`.
    pub fn data_scalar(&self, node: &JsonValue) -> Option<Value> {
        let raw = self.value(node, data::VALUE)?;
        Some(coerce_literal(raw, literal_kind(self, datatype_of(self, node))))
    }

    /// The members of a `data:Array`, skipping empty ones.
    pub fn data_array(&self, node: &JsonValue) -> Option<Vec<Value>> {
        let members = self.property(node, rdfs::MEMBER)?;
        let values = super::ensure_array(members)
            .into_iter()
            .filter_map(|member| self.data_scalar(member))
            .filter(|v| !v.is_blank())
            .collect();
        Some(values)
    }
}

/// Coerces a JSON literal to a form value.
///
/// Numeric literals that do not parse stay strings; boolean literals are true
/// unless they read `"false"`.
pub fn coerce_literal(raw: &JsonValue, kind: LiteralKind) -> Value {
    match (kind, raw) {
        (LiteralKind::Number, JsonValue::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Value::Number)
            .unwrap_or_else(|_| Value::Str(s.clone())),
        (LiteralKind::Boolean, JsonValue::String(s)) => Value::Bool(s != "false"),
        (_, other) => Value::from_json(other).unwrap_or_else(|| Value::Str(other.to_string())),
    }
}
