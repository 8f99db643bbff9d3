use crate::error::GraphError;
use ahash::AHashMap;
use serde_json::Value as JsonValue;
use tracing::debug;

mod access;
mod data;

pub use access::ensure_array;
pub use data::coerce_literal;

/// A parsed AMF JSON-LD document together with the lookup tables the engine needs.
///
/// Both expanded (full IRI keys) and compact (`prefix:term` keys, declared by an
/// `@context`) documents are supported. Every node carrying an `@id` is indexed
/// once so that references and `link-target`s can be followed cheaply.
#[derive(Debug, Clone)]
pub struct AmfGraph {
    document: JsonValue,
    /// `(prefix, namespace)` pairs from the document's `@context`.
    context: Vec<(String, String)>,
    /// The `@base` declared by the context, if any.
    base: Option<String>,
    /// `@id` -> JSON pointer of the defining node.
    index: AHashMap<String, String>,
}

impl AmfGraph {
    /// Parses a JSON-LD document from a string.
    pub fn from_json(source: &str) -> Result<Self, GraphError> {
        let document: JsonValue =
            serde_json::from_str(source).map_err(|e| GraphError::JsonParseError(e.to_string()))?;
        Self::new(document)
    }

    /// Wraps an already parsed JSON-LD document.
    pub fn new(document: JsonValue) -> Result<Self, GraphError> {
        let found = match &document {
            JsonValue::Object(_) | JsonValue::Array(_) => None,
            JsonValue::Null => Some("null"),
            JsonValue::Bool(_) => Some("a boolean"),
            JsonValue::Number(_) => Some("a number"),
            JsonValue::String(_) => Some("a string"),
        };
        if let Some(found) = found {
            return Err(GraphError::InvalidDocument { found });
        }

        let (context, base) = Self::read_context(&document);
        let mut index = AHashMap::new();
        index_nodes(&document, &mut String::new(), &mut index);
        debug!(
            nodes = index.len(),
            prefixes = context.len(),
            "indexed API model"
        );

        Ok(Self {
            document,
            context,
            base,
            index,
        })
    }

    /// The whole document as it was loaded.
    pub fn document(&self) -> &JsonValue {
        &self.document
    }

    /// The encoded root node: the first element of an array document, or the document itself.
    pub fn root(&self) -> &JsonValue {
        match &self.document {
            JsonValue::Array(items) => items.first().unwrap_or(&self.document),
            other => other,
        }
    }

    /// Whether the document declares a compact `@context`.
    pub fn is_compact(&self) -> bool {
        !self.context.is_empty()
    }

    /// Looks up an identified node by its `@id`.
    ///
    /// Ids are matched as written first, then with the context's `@base`
    /// added or removed, since compact documents mix both spellings.
    pub fn node(&self, id: &str) -> Option<&JsonValue> {
        let pointer = self.index.get(id).or_else(|| {
            let base = self.base.as_deref()?;
            match id.strip_prefix(base) {
                Some(relative) => self.index.get(relative),
                None => self.index.get(&format!("{}{}", base, id)),
            }
        })?;
        self.document.pointer(pointer)
    }

    /// Same as [`AmfGraph::node`], returning an error for unknown ids.
    pub fn require_node(&self, id: &str) -> Result<&JsonValue, GraphError> {
        self.node(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
    }

    /// Maps a full IRI to the key used by this document.
    ///
    /// Returns `prefix:term` when the context declares the IRI's namespace,
    /// the context term itself when it maps the whole IRI, and the IRI
    /// unchanged otherwise.
    pub fn amf_key(&self, iri: &str) -> String {
        let split = iri.find('#').map(|i| i + 1).unwrap_or(0);
        let (namespace, term) = iri.split_at(split);
        for (prefix, value) in &self.context {
            if value == iri {
                return prefix.clone();
            }
            if split > 0 && value == namespace {
                return format!("{}:{}", prefix, term);
            }
        }
        iri.to_string()
    }

    fn read_context(document: &JsonValue) -> (Vec<(String, String)>, Option<String>) {
        let root = match document {
            JsonValue::Array(items) => items.first(),
            other => Some(other),
        };
        let Some(JsonValue::Object(ctx)) = root.and_then(|r| r.get("@context")) else {
            return (Vec::new(), None);
        };
        let base = ctx
            .get("@base")
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        let context = ctx
            .iter()
            .filter(|(prefix, _)| !prefix.starts_with('@'))
            .filter_map(|(prefix, ns)| ns.as_str().map(|ns| (prefix.clone(), ns.to_string())))
            .collect();
        (context, base)
    }
}

/// Records a JSON pointer for every node that defines (not merely references) an `@id`.
/// The first definition of an id wins.
fn index_nodes(value: &JsonValue, path: &mut String, index: &mut AHashMap<String, String>) {
    match value {
        JsonValue::Object(map) => {
            if let Some(JsonValue::String(id)) = map.get("@id") {
                if map.len() > 1 && !index.contains_key(id) {
                    index.insert(id.clone(), path.clone());
                }
            }
            for (key, child) in map {
                let len = path.len();
                path.push('/');
                path.push_str(&key.replace('~', "~0").replace('/', "~1"));
                index_nodes(child, path, index);
                path.truncate(len);
            }
        }
        JsonValue::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let len = path.len();
                path.push('/');
                path.push_str(&i.to_string());
                index_nodes(child, path, index);
                path.truncate(len);
            }
        }
        _ => {}
    }
}
