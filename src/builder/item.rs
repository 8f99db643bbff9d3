use super::post::{self, ProcessOptions};
use super::{ApiViewModel, MAX_NESTING};
use crate::cache::cache_key;
use crate::classifier::{self, LiteralKind, ShapeKind};
use crate::graph::coerce_literal;
use crate::model::{ApiType, Binding, ItemValue, Schema, Value, ViewModelItem};
use crate::vocab::{api_contract, core, document, rdfs, shacl, shapes};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, trace};

const NO_AUTO_ENCODING: &str = "no-auto-encoding";
const AMF_ID_PREFIX: &str = "amf://id";

/// What the item builder needs to know about a node before reading its shape.
struct ItemSource<'a> {
    name: String,
    binding: Binding,
    required: bool,
    /// The resolved schema or range of the node.
    shape: Option<&'a JsonValue>,
    /// Node holding the item's own description.
    docs: &'a JsonValue,
}

/// Completes an input label: the display name, else the item name, marked with
/// `*` when the item is required.
pub(super) fn input_label(display_name: Option<&str>, name: &str, required: bool) -> String {
    let mut label = match display_name {
        Some(display) if !display.is_empty() => display.to_string(),
        _ if !name.is_empty() => name.to_string(),
        _ => "Input value".to_string(),
    };
    if required {
        label.push('*');
    }
    label
}

impl<'g> ApiViewModel<'g> {
    /// Builds the item for an `apiContract:Parameter` node.
    pub(super) fn parameter_item(&mut self, parameter: &JsonValue) -> Arc<ViewModelItem> {
        let graph = self.graph;
        let parameter = graph.resolve(parameter);
        let binding = Binding::from_declared(graph.str_value(parameter, api_contract::BINDING));
        let name = graph
            .str_value(parameter, api_contract::PARAM_NAME)
            .or_else(|| graph.str_value(parameter, core::NAME))
            .unwrap_or_default()
            .to_string();
        let required = graph
            .bool_value(parameter, api_contract::REQUIRED)
            .unwrap_or(false);
        let shape = graph
            .first(parameter, shapes::SCHEMA)
            .map(|schema| graph.resolve(schema));

        self.build_item(ItemSource {
            binding,
            required,
            shape,
            docs: parameter,
            name,
        })
    }

    /// Builds the item for a `sh:PropertyShape`, or a scalar shape standing in
    /// for one. Property shapes without a range produce nothing.
    pub(super) fn property_shape_item(&mut self, property: &JsonValue) -> Option<Arc<ViewModelItem>> {
        let graph = self.graph;
        let property = graph.resolve(property);
        let shape = if graph.has_type(property, shapes::SCALAR_SHAPE) {
            property
        } else {
            match graph.first(property, shapes::RANGE) {
                Some(range) => graph.resolve(range),
                None => {
                    debug!(id = ?graph.id_of(property), "property shape without a range skipped");
                    return None;
                }
            }
        };
        let name = graph
            .str_value(property, shacl::NAME)
            .unwrap_or_default()
            .to_string();
        let required = graph
            .f64_value(property, shacl::MIN_COUNT)
            .is_some_and(|count| count == 1.0);

        Some(self.build_item(ItemSource {
            name,
            binding: Binding::Type,
            required,
            shape: Some(shape),
            docs: shape,
        }))
    }

    fn build_item(&mut self, source: ItemSource<'_>) -> Arc<ViewModelItem> {
        let graph = self.graph;
        let api_type = source
            .shape
            .map_or(ApiType::String, |shape| classifier::classify(graph, shape));
        let is_enum = source
            .shape
            .is_some_and(|shape| graph.has_property(shape, shacl::IN));

        let key = cache_key(&source.name, api_type, is_enum, source.required);
        // Items cut at the nesting limit are only reused at the same depth.
        let depth_key = format!("{}@{}", key, self.depth);
        if let Some(cached) = self.cache.get(source.binding, &key) {
            debug!(%key, binding = %source.binding, "view model cache hit");
            return cached;
        }
        if let Some(cached) = self.cache.get(source.binding, &depth_key) {
            debug!(key = %depth_key, binding = %source.binding, "view model cache hit");
            self.truncated = true;
            return cached;
        }
        trace!(%key, binding = %source.binding, "building view model item");

        let mut schema = Schema {
            api_type,
            required: source.required,
            ..Schema::default()
        };
        schema.sync_type_flags();
        let display_name = source.shape.and_then(|shape| graph.str_value(shape, core::NAME));
        schema.input_label = Some(input_label(display_name, &source.name, source.required));
        if let Some(shape) = source.shape {
            self.read_shape(shape, &mut schema);
        }
        schema.input_type = classifier::input_type(schema.api_type, schema.items);

        if self.with_docs() {
            schema.description = graph
                .str_value(source.docs, core::DESCRIPTION)
                .or_else(|| source.shape.and_then(|s| graph.str_value(s, core::DESCRIPTION)))
                .map(str::to_string);
        }

        let mut item = ViewModelItem {
            name: source.name,
            value: None,
            enabled: true,
            schema,
            properties: None,
        };
        if item.schema.is_bool {
            item.value = item.schema.default_value.clone();
        }
        let outer_truncated = std::mem::take(&mut self.truncated);
        if item.schema.is_object {
            item.properties = source.shape.map(|shape| self.nested_properties(shape));
        }
        let truncated = self.truncated;
        self.truncated |= outer_truncated;

        let name = item.name.clone();
        let opts = ProcessOptions::for_binding(&name, source.binding);
        let item = Arc::new(post::finalize(item, source.binding, &opts, self.with_docs()));
        let key = if truncated { depth_key } else { key };
        if self.cache.put(source.binding, key.clone(), item.clone()) {
            trace!(%key, binding = %source.binding, "view model item cached");
        }
        item
    }

    /// Reads type details, constraints, examples and annotations from a resolved shape.
    fn read_shape(&self, shape: &JsonValue, schema: &mut Schema) {
        let graph = self.graph;
        schema.pattern = graph.str_value(shape, shacl::PATTERN).map(str::to_string);
        schema.min_length = graph.u64_value(shape, shacl::MIN_LENGTH);
        schema.max_length = graph.u64_value(shape, shacl::MAX_LENGTH);
        schema.minimum = graph.f64_value(shape, shacl::MIN_INCLUSIVE);
        schema.maximum = graph.f64_value(shape, shacl::MAX_INCLUSIVE);
        schema.multiple_of = graph.f64_value(shape, shapes::MULTIPLE_OF);
        schema.default_value = self.default_value(shape);
        schema.enum_values = self.enum_values(shape);
        schema.format = graph.str_value(shape, shapes::FORMAT).map(str::to_string);
        schema.pattern =
            classifier::type_pattern(schema.api_type, schema.pattern.take(), schema.format.as_deref());
        schema.no_auto_encode = self.has_no_auto_encode(shape);

        match schema.api_type {
            ApiType::Array => schema.items = self.array_items(shape),
            ApiType::Union => schema.is_nillable = self.is_nillable(shape),
            ApiType::File => {
                let types: Vec<String> = graph
                    .values(shape, shapes::FILE_TYPE)
                    .into_iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect();
                schema.file_types = (!types.is_empty()).then_some(types);
            }
            _ => {}
        }

        if self.with_docs() {
            let examples = self.examples_for(shape);
            schema.examples = (!examples.is_empty()).then_some(examples);
        }
    }

    /// The declared default, typed by the shape's datatype. Array shapes
    /// prefer their structured default over the default string.
    fn default_value(&self, shape: &JsonValue) -> Option<ItemValue> {
        let graph = self.graph;
        let raw = graph
            .value(shape, shacl::DEFAULT_VALUE_STR)
            .filter(|v| v.as_str().is_none_or(|s| !s.is_empty()))?;
        match ShapeKind::of(graph, shape) {
            Some(ShapeKind::Scalar) => {
                let kind =
                    classifier::literal_kind(graph, classifier::datatype_of(graph, shape));
                Some(ItemValue::Scalar(coerce_literal(raw, kind)))
            }
            Some(ShapeKind::Array) if graph.has_type(shape, shapes::ARRAY_SHAPE) => {
                let structured = graph
                    .first(shape, shacl::DEFAULT_VALUE)
                    .and_then(|node| graph.data_array(node));
                match structured {
                    Some(values) => Some(ItemValue::List(values)),
                    None => Some(ItemValue::Scalar(coerce_literal(raw, LiteralKind::Text))),
                }
            }
            _ => Some(ItemValue::Scalar(coerce_literal(raw, LiteralKind::Text))),
        }
    }

    /// Values of the shape's `sh:in` list, in declaration order.
    fn enum_values(&self, shape: &JsonValue) -> Option<Vec<Value>> {
        let graph = self.graph;
        let list = graph.first(shape, shacl::IN)?;
        let list = graph.resolve(list);
        let member_prefix = graph.amf_key(rdfs::NS);
        let values = list
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(key, _)| key.starts_with(&member_prefix) || key.starts_with(rdfs::NS))
            .filter_map(|(_, member)| {
                let member = match member {
                    JsonValue::Array(items) => items.first()?,
                    other => other,
                };
                graph.data_scalar(member)
            })
            .filter(|v| !v.is_blank())
            .collect();
        Some(values)
    }

    fn array_items(&self, shape: &JsonValue) -> Option<ApiType> {
        let graph = self.graph;
        if !graph.has_type(shape, shapes::ARRAY_SHAPE) {
            return None;
        }
        let items = graph.first(shape, shapes::ITEMS)?;
        Some(classifier::classify(graph, graph.resolve(items)))
    }

    /// A union is nillable when one of its `anyOf` branches is a nil shape.
    fn is_nillable(&self, shape: &JsonValue) -> bool {
        let graph = self.graph;
        graph
            .nodes(shape, shapes::ANY_OF)
            .into_iter()
            .any(|branch| graph.has_type(graph.resolve(branch), shapes::NIL_SHAPE))
    }

    /// Checks for the `no-auto-encoding` annotation among the shape's custom
    /// domain properties.
    fn has_no_auto_encode(&self, shape: &JsonValue) -> bool {
        let graph = self.graph;
        graph
            .nodes(shape, document::CUSTOM_DOMAIN_PROPERTIES)
            .into_iter()
            .filter_map(|property| graph.id_of(property))
            .filter_map(|id| {
                shape.get(id).or_else(|| {
                    let prefixed = if id.starts_with(AMF_ID_PREFIX) {
                        id.to_string()
                    } else {
                        format!("{}{}", AMF_ID_PREFIX, id)
                    };
                    shape.get(prefixed.as_str())
                })
            })
            .filter_map(|extension| match extension {
                JsonValue::Array(items) => items.first(),
                other => Some(other),
            })
            .any(|extension| {
                graph.str_value(extension, core::EXTENSION_NAME) == Some(NO_AUTO_ENCODING)
            })
    }

    fn nested_properties(&mut self, shape: &JsonValue) -> Vec<Arc<ViewModelItem>> {
        if self.depth >= MAX_NESTING {
            debug!(depth = self.depth, "object nesting limit reached, properties skipped");
            self.truncated = true;
            return Vec::new();
        }
        self.depth += 1;
        let properties = self.properties_of(shape);
        self.depth -= 1;
        properties
    }
}
