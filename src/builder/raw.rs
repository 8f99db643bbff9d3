use super::ApiViewModel;
use super::item::input_label;
use super::post::{self, ProcessOptions};
use crate::classifier;
use crate::model::{ApiType, Binding, Example, ItemValue, Schema, Value, ViewModelItem};
use crate::vocab::data;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::trace;

/// The part of a `data:` key after the namespace: `data:limit` and
/// `http://a.ml/vocabularies/data#limit` both read `limit`.
fn local_name(key: &str) -> &str {
    key.find('#')
        .or_else(|| key.find(':'))
        .map_or(key, |i| &key[i + 1..])
}

impl<'g> ApiViewModel<'g> {
    /// Builds one item per `data:` entry of an untyped annotation object, such
    /// as a trait or annotation declaration that was never resolved into shapes.
    ///
    /// These items are finalized with the `type` binding and are not cached.
    pub fn model_for_raw_object(&self, model: &JsonValue) -> Vec<Arc<ViewModelItem>> {
        let data_key = self.graph.amf_key(data::NS);
        model
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(key, _)| key.contains(&data_key) || key.contains(data::NS))
            .filter_map(|(key, entry)| {
                let entry = match entry {
                    JsonValue::Array(items) => items.first()?,
                    other => other,
                };
                let item = self.raw_item(key, entry);
                let item = post::finalize(
                    item,
                    Binding::Type,
                    &ProcessOptions::plain(),
                    self.with_docs(),
                );
                Some(Arc::new(item))
            })
            .collect()
    }

    fn raw_item(&self, key: &str, model: &JsonValue) -> ViewModelItem {
        let name = local_name(key).to_string();
        trace!(%name, "building raw annotation item");

        let declared = self
            .raw_scalar(model, data::TYPE)
            .map(|v| v.to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| ApiType::String.to_string());
        let (type_name, array_items) = match declared.find("[]") {
            Some(i) => ("array", Some(declared[..i].to_string())),
            None => (declared.as_str(), None),
        };
        let api_type = ApiType::from_type_name(type_name).unwrap_or_default();

        let required = match self.raw_scalar(model, data::REQUIRED) {
            Some(Value::Bool(required)) => required,
            Some(Value::Str(s)) => s == "true",
            _ => false,
        };
        let display_name = self.raw_scalar(model, data::DISPLAY_NAME).map(|v| v.to_string());

        let mut schema = Schema {
            api_type,
            required,
            input_label: Some(input_label(display_name.as_deref(), &name, required)),
            min_length: self.raw_number(model, data::MIN_LENGTH).map(|n| n as u64),
            max_length: self.raw_number(model, data::MAX_LENGTH).map(|n| n as u64),
            minimum: self.raw_number(model, data::MINIMUM),
            maximum: self.raw_number(model, data::MAXIMUM),
            multiple_of: self.raw_number(model, data::MULTIPLE_OF),
            default_value: self.raw_value(model, data::DEFAULT),
            enum_values: self.raw_value(model, data::ENUM).map(|v| match v {
                ItemValue::List(values) => values,
                ItemValue::Scalar(value) => vec![value],
            }),
            format: self.raw_scalar(model, data::FORMAT).map(|v| v.to_string()),
            ..Schema::default()
        };
        schema.sync_type_flags();

        let pattern = match self.raw_value(model, data::PATTERN) {
            Some(ItemValue::List(values)) => values.first().map(|first| format!("[{}]", first)),
            Some(ItemValue::Scalar(value)) => Some(value.to_string()),
            None => None,
        };
        schema.pattern =
            classifier::type_pattern(schema.api_type, pattern, schema.format.as_deref());

        if schema.is_array {
            schema.items = match array_items {
                Some(items) => ApiType::from_type_name(&items),
                None => self
                    .raw_value(model, data::ITEMS)
                    .and_then(|v| match v {
                        ItemValue::Scalar(value) => Some(value),
                        ItemValue::List(values) => values.into_iter().next(),
                    })
                    .and_then(|value| ApiType::from_type_name(&value.to_string())),
            };
        }
        schema.input_type = classifier::input_type(schema.api_type, schema.items);

        if self.with_docs() {
            schema.description = self
                .raw_scalar(model, data::DESCRIPTION)
                .map(|v| v.to_string());
            let mut examples = Vec::new();
            if let Some(example) = self
                .raw_value(model, data::EXAMPLE)
                .filter(|v| !v.is_blank())
            {
                examples.push(Example::new(None, example));
            }
            examples.extend(self.raw_examples(model));
            schema.examples = (!examples.is_empty()).then_some(examples);
        }

        ViewModelItem {
            name,
            value: None,
            enabled: true,
            schema,
            properties: None,
        }
    }

    /// Named examples from a `data:examples` object, one per `data:` key.
    fn raw_examples(&self, model: &JsonValue) -> Vec<Example> {
        let graph = self.graph;
        let Some(examples) = graph.first(model, data::EXAMPLES) else {
            return Vec::new();
        };
        let data_key = graph.amf_key(data::NS);
        examples
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(key, _)| key.contains(&data_key) || key.contains(data::NS))
            .filter_map(|(key, node)| {
                let value = graph.data_value(node).filter(|v| !v.is_blank())?;
                Some(Example::new(Some(local_name(key).to_string()), value))
            })
            .collect()
    }

    fn raw_value(&self, model: &JsonValue, iri: &str) -> Option<ItemValue> {
        let node = self.graph.property(model, iri)?;
        self.graph.data_value(node)
    }

    fn raw_scalar(&self, model: &JsonValue, iri: &str) -> Option<Value> {
        match self.raw_value(model, iri)? {
            ItemValue::Scalar(value) => Some(value),
            ItemValue::List(_) => None,
        }
    }

    fn raw_number(&self, model: &JsonValue, iri: &str) -> Option<f64> {
        match self.raw_scalar(model, iri)? {
            Value::Number(n) => Some(n),
            Value::Str(s) => s.trim().parse().ok(),
            Value::Bool(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::local_name;

    #[test]
    fn test_local_name_handles_both_key_forms() {
        assert_eq!(local_name("data:limit"), "limit");
        assert_eq!(local_name("http://a.ml/vocabularies/data#limit"), "limit");
        assert_eq!(local_name("limit"), "limit");
    }
}
