use super::{ApiType, InputType, ItemValue, Value};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One form field produced from the API graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModelItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ItemValue>,
    pub enabled: bool,
    pub schema: Schema,
    /// Nested items, present only for `object` typed items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Arc<ViewModelItem>>>,
}

impl Default for ViewModelItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: None,
            enabled: true,
            schema: Schema::default(),
            properties: None,
        }
    }
}

impl ViewModelItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Finds a nested property by name.
    pub fn property(&self, name: &str) -> Option<&Arc<ViewModelItem>> {
        self.properties
            .as_ref()?
            .iter()
            .find(|item| item.name == name)
    }
}

/// Type classification, constraints and rendering hints of a form item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub api_type: ApiType,
    pub required: bool,

    pub is_array: bool,
    pub is_bool: bool,
    pub is_object: bool,
    pub is_file: bool,
    pub is_nillable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ItemValue>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Element type of `array` items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ApiType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_types: Option<Vec<String>>,
    #[serde(default)]
    pub no_auto_encode: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub is_custom: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_placeholder: Option<String>,
    pub input_type: InputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

impl Schema {
    /// Re-derives the boolean type flags from `api_type`.
    pub fn sync_type_flags(&mut self) {
        self.is_array = self.api_type == ApiType::Array;
        self.is_bool = self.api_type == ApiType::Boolean;
        self.is_object = self.api_type == ApiType::Object;
        self.is_file = self.api_type == ApiType::File;
        if self.api_type != ApiType::Union {
            self.is_nillable = false;
        }
    }
}

/// A labelled example value.
///
/// Some example sources call the label a title and others a name; `name` is
/// the single field used for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ItemValue>,
}

impl Example {
    pub fn new(name: Option<String>, value: impl Into<ItemValue>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }

    /// An example without a usable value (absent or empty string).
    pub fn is_empty(&self) -> bool {
        self.value.as_ref().is_none_or(ItemValue::is_blank)
    }
}
