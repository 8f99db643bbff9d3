use super::AmfGraph;
use crate::vocab::document;
use serde_json::Value as JsonValue;

/// Upper bound on reference hops followed by [`AmfGraph::resolve`].
/// Cyclic `link-target` chains stop here instead of looping.
const MAX_RESOLVE_DEPTH: usize = 16;

/// Normalizes a JSON-LD property value into a list of entries.
pub fn ensure_array(value: &JsonValue) -> Vec<&JsonValue> {
    match value {
        JsonValue::Array(items) => items.iter().collect(),
        JsonValue::Null => Vec::new(),
        other => vec![other],
    }
}

fn unwrap_literal(value: &JsonValue) -> &JsonValue {
    match value.get("@value") {
        Some(inner) => inner,
        None => value,
    }
}

impl AmfGraph {
    /// Raw value stored under a vocabulary term, in either compact or expanded form.
    pub fn property<'a>(&self, node: &'a JsonValue, iri: &str) -> Option<&'a JsonValue> {
        let map = node.as_object()?;
        map.get(&self.amf_key(iri)).or_else(|| map.get(iri))
    }

    /// Checks whether `node` is declared with the `@type` identified by `iri`.
    pub fn has_type(&self, node: &JsonValue, iri: &str) -> bool {
        let Some(types) = node.get("@type") else {
            return false;
        };
        let key = self.amf_key(iri);
        ensure_array(types)
            .into_iter()
            .filter_map(JsonValue::as_str)
            .any(|t| t == key || t == iri)
    }

    /// Checks whether the term is present on the node at all.
    pub fn has_property(&self, node: &JsonValue, iri: &str) -> bool {
        self.property(node, iri).is_some()
    }

    /// The first entry of a property, without unwrapping `@value`.
    pub fn first<'a>(&self, node: &'a JsonValue, iri: &str) -> Option<&'a JsonValue> {
        let value = self.property(node, iri)?;
        match value {
            JsonValue::Array(items) => items.first(),
            other => Some(other),
        }
    }

    /// Every entry of a property, as nested nodes.
    pub fn nodes<'a>(&self, node: &'a JsonValue, iri: &str) -> Vec<&'a JsonValue> {
        self.property(node, iri)
            .map(ensure_array)
            .unwrap_or_default()
    }

    /// The first literal value of a property, with `@value` unwrapped.
    pub fn value<'a>(&self, node: &'a JsonValue, iri: &str) -> Option<&'a JsonValue> {
        self.first(node, iri)
            .map(unwrap_literal)
            .filter(|v| !v.is_null())
    }

    /// Every literal value of a property, with `@value` unwrapped.
    pub fn values<'a>(&self, node: &'a JsonValue, iri: &str) -> Vec<&'a JsonValue> {
        self.nodes(node, iri)
            .into_iter()
            .map(unwrap_literal)
            .filter(|v| !v.is_null())
            .collect()
    }

    pub fn str_value<'a>(&self, node: &'a JsonValue, iri: &str) -> Option<&'a str> {
        self.value(node, iri).and_then(JsonValue::as_str)
    }

    /// A boolean literal. String literals `"true"`/`"false"` are accepted too.
    pub fn bool_value(&self, node: &JsonValue, iri: &str) -> Option<bool> {
        match self.value(node, iri)? {
            JsonValue::Bool(b) => Some(*b),
            JsonValue::String(s) => Some(s == "true"),
            _ => None,
        }
    }

    /// A numeric literal. Numbers serialized as strings are parsed.
    pub fn f64_value(&self, node: &JsonValue, iri: &str) -> Option<f64> {
        match self.value(node, iri)? {
            JsonValue::Number(n) => n.as_f64(),
            JsonValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// A non-negative integer literal, such as a length constraint.
    pub fn u64_value(&self, node: &JsonValue, iri: &str) -> Option<u64> {
        match self.value(node, iri)? {
            JsonValue::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f as u64)),
            JsonValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Compares an IRI read from the document, in either form, with a full IRI.
    pub fn same_iri(&self, candidate: &str, iri: &str) -> bool {
        candidate == iri || candidate == self.amf_key(iri)
    }

    /// The `@id` a node defines or points to.
    pub fn id_of<'a>(&self, node: &'a JsonValue) -> Option<&'a str> {
        match node {
            JsonValue::String(s) => Some(s),
            other => other.get("@id").and_then(JsonValue::as_str),
        }
    }

    /// Follows `link-target`s and bare `{"@id": ..}` references to the defining node.
    ///
    /// Unresolvable references resolve to the node itself.
    pub fn resolve<'a>(&'a self, node: &'a JsonValue) -> &'a JsonValue {
        let mut current = node;
        for _ in 0..MAX_RESOLVE_DEPTH {
            let target_id = if let Some(target) = self.first(current, document::LINK_TARGET) {
                self.id_of(target)
            } else if is_reference(current) {
                self.id_of(current)
            } else {
                None
            };
            let Some(next) = target_id.and_then(|id| self.node(id)) else {
                break;
            };
            if std::ptr::eq(next, current) {
                break;
            }
            current = next;
        }
        current
    }
}

/// A node that only carries an `@id`.
fn is_reference(node: &JsonValue) -> bool {
    node.as_object()
        .is_some_and(|map| map.len() == 1 && map.contains_key("@id"))
}
