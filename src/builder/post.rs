//! Final stage of item construction: value seeding and normalization,
//! placeholders, the nil sentinel and the extended description.

use crate::classifier::type_placeholder;
use crate::model::{ApiType, Binding, ItemValue, Schema, Value, ViewModelItem};
use serde_json::Value as JsonValue;

/// How example and default strings are normalized for one item.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions<'a> {
    /// Parameter name, stripped from `name<delimiter>value` examples.
    pub name: &'a str,
    pub delimiter: Option<char>,
    /// URL-decode values (`+` reads as a space).
    pub decode: bool,
}

impl<'a> ProcessOptions<'a> {
    /// No prefix stripping and no decoding.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn for_binding(name: &'a str, binding: Binding) -> Self {
        Self {
            name,
            delimiter: binding.value_delimiter(),
            decode: binding.decodes_values(),
        }
    }
}

/// Normalizes an example, default or enum entry into a form value.
///
/// Strings are trimmed, a leading `name<delimiter>` is removed, and query
/// values are URL-decoded. Values that fail to decode are kept as they are.
pub fn example_as_value(value: &Value, opts: &ProcessOptions) -> Value {
    let Value::Str(raw) = value else {
        return value.clone();
    };
    if raw.is_empty() {
        return value.clone();
    }
    let mut example = raw.trim();
    if let Some(delimiter) = opts.delimiter {
        let stripped = example
            .strip_prefix(opts.name)
            .and_then(|rest| rest.strip_prefix(delimiter));
        if let Some(rest) = stripped {
            example = rest.trim();
        }
    }
    if opts.decode {
        if let Some(decoded) = url_decode(example) {
            return Value::Str(decoded);
        }
    }
    Value::Str(example.to_string())
}

/// Decodes a query value with `+` read as a space. Returns `None` for a
/// malformed `%` escape or bytes that are not UTF-8.
fn url_decode(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return None;
    }
    urlencoding::decode(&text.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}

fn item_as_value(value: &ItemValue, opts: &ProcessOptions) -> ItemValue {
    match value {
        ItemValue::Scalar(v) => ItemValue::Scalar(example_as_value(v, opts)),
        ItemValue::List(values) => {
            ItemValue::List(values.iter().map(|v| example_as_value(v, opts)).collect())
        }
    }
}

/// Reads an array example written as a JSON array.
///
/// Anything that is not a JSON array is taken as a single scalar example.
/// Returns `None` when the array holds no usable entries.
pub fn parse_array_example(example: &str, opts: &ProcessOptions) -> Option<ItemValue> {
    match serde_json::from_str::<JsonValue>(example) {
        Ok(JsonValue::Array(entries)) => {
            let values: Vec<Value> = entries
                .iter()
                .filter_map(Value::from_json)
                .map(|v| example_as_value(&v, opts))
                .filter(|v| !v.is_blank())
                .collect();
            (!values.is_empty()).then_some(ItemValue::List(values))
        }
        _ => Some(ItemValue::Scalar(example_as_value(
            &Value::Str(example.to_string()),
            opts,
        ))),
    }
}

fn array_value(value: &ItemValue, opts: &ProcessOptions) -> Option<ItemValue> {
    match value {
        ItemValue::Scalar(Value::Str(s)) => parse_array_example(s, opts),
        other => Some(item_as_value(other, opts)),
    }
}

/// Runs the value and hint stage on a built item and returns it finalized.
///
/// The item is owned here until every derived field is set, so no partially
/// finalized item can reach the cache.
pub(crate) fn finalize(
    mut item: ViewModelItem,
    binding: Binding,
    opts: &ProcessOptions,
    with_docs: bool,
) -> ViewModelItem {
    let schema = &mut item.schema;

    let first_example = schema
        .examples
        .as_ref()
        .and_then(|examples| examples.first())
        .and_then(|example| example.value.as_ref())
        .filter(|value| !value.is_blank());
    if let Some(example) = first_example {
        schema.input_placeholder = Some(format!("Example: {}", item_as_value(example, opts)));
    }
    if schema.input_placeholder.is_none() {
        schema.input_placeholder =
            type_placeholder(schema.api_type, schema.format.as_deref()).map(str::to_string);
    }

    if schema.required {
        if let Some(default) = &schema.default_value {
            item.value = if schema.is_array {
                array_value(default, opts)
            } else {
                Some(item_as_value(default, opts))
            };
        }
    }
    if item.value.is_none() && schema.required {
        item.value = schema
            .examples
            .as_ref()
            .and_then(|examples| examples.first())
            .and_then(|example| example.value.as_ref())
            .map(|value| item_as_value(value, opts));
        if item.value.as_ref().is_none_or(ItemValue::is_blank) {
            if let Some(first) = schema.enum_values.as_ref().and_then(|e| e.first()) {
                item.value = Some(ItemValue::Scalar(example_as_value(first, opts)));
            }
        }
    }

    // A lone valueless example next to an enum is generator noise.
    let lone_empty_example = schema
        .examples
        .as_ref()
        .is_some_and(|examples| examples.len() == 1 && examples[0].is_empty());
    if schema.enum_values.is_some() && lone_empty_example {
        schema.examples = None;
    }

    if schema.is_array {
        item.value = match item.value.take() {
            Some(ItemValue::Scalar(Value::Str(s))) if !s.is_empty() => {
                match parse_array_example(&s, opts) {
                    Some(ItemValue::Scalar(v)) => Some(ItemValue::List(vec![v])),
                    other => other,
                }
            }
            Some(ItemValue::Scalar(v)) if !v.is_blank() => Some(ItemValue::List(vec![v])),
            Some(list @ ItemValue::List(_)) => Some(list),
            _ => None,
        };
        if item.value.is_none() {
            item.value = Some(ItemValue::List(vec![Value::Str(String::new())]));
        }
    }

    if schema.is_bool {
        if let Some(ItemValue::Scalar(Value::Bool(b))) = item.value {
            item.value = Some(ItemValue::Scalar(Value::Str(b.to_string())));
        }
    }

    if schema.api_type == ApiType::Null {
        item.value = Some(ItemValue::Scalar(Value::Str(
            binding.nil_sentinel().to_string(),
        )));
        schema.read_only = true;
    }

    if with_docs {
        schema.extended_description = Some(extended_description(schema));
    }
    item
}

/// Composes the markdown shown next to an input: the description, then one
/// bullet for the pattern and one per example.
pub fn extended_description(schema: &Schema) -> String {
    let mut docs = schema.description.clone().unwrap_or_default();
    let mut bullets = Vec::new();
    if let Some(pattern) = schema.pattern.as_deref().filter(|p| !p.is_empty()) {
        bullets.push(format!("- Pattern: `{}`", pattern));
    }
    for example in schema.examples.iter().flatten() {
        let Some(value) = example.value.as_ref().filter(|v| !v.is_blank()) else {
            continue;
        };
        let rendered = match value {
            ItemValue::Scalar(v) => v.to_string(),
            ItemValue::List(values) => itertools::join(values.iter(), ", "),
        };
        match &example.name {
            Some(name) => bullets.push(format!("- Example {}: `{}`", name, rendered)),
            None => bullets.push(format!("- Example: `{}`", rendered)),
        }
    }
    if !docs.is_empty() && !bullets.is_empty() {
        docs.push_str("\n\n\n");
    }
    docs + &bullets.join("\n")
}
