use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic type of a form item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApiType {
    #[default]
    #[serde(rename = "string")]
    String,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "datetime-only")]
    DateTimeOnly,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "array")]
    Array,
    #[serde(rename = "union")]
    Union,
}

impl ApiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiType::String => "string",
            ApiType::Integer => "integer",
            ApiType::Long => "long",
            ApiType::Float => "float",
            ApiType::Double => "double",
            ApiType::Number => "number",
            ApiType::Boolean => "boolean",
            ApiType::DateTime => "datetime",
            ApiType::DateTimeOnly => "datetime-only",
            ApiType::Time => "time",
            ApiType::Date => "date",
            ApiType::Password => "password",
            ApiType::File => "file",
            ApiType::Null => "null",
            ApiType::Object => "object",
            ApiType::Array => "array",
            ApiType::Union => "union",
        }
    }

    /// Parses a type name as written in a RAML-style declaration.
    ///
    /// RAML's `date-only`, `time-only` and `nil` spellings map onto the
    /// matching tags.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let api_type = match name.trim() {
            "string" => ApiType::String,
            "integer" => ApiType::Integer,
            "long" => ApiType::Long,
            "float" => ApiType::Float,
            "double" => ApiType::Double,
            "number" => ApiType::Number,
            "boolean" => ApiType::Boolean,
            "datetime" => ApiType::DateTime,
            "datetime-only" => ApiType::DateTimeOnly,
            "time" | "time-only" => ApiType::Time,
            "date" | "date-only" => ApiType::Date,
            "password" => ApiType::Password,
            "file" => ApiType::File,
            "null" | "nil" => ApiType::Null,
            "object" => ApiType::Object,
            "array" => ApiType::Array,
            "union" => ApiType::Union,
            _ => return None,
        };
        Some(api_type)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ApiType::Number | ApiType::Integer | ApiType::Long | ApiType::Float | ApiType::Double
        )
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of input a rendering layer should use for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Number,
    Boolean,
    Date,
    #[default]
    Text,
}

/// The HTTP location of a parameter.
///
/// `Type` means no HTTP location: a body or object property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Binding {
    Header,
    Query,
    Path,
    #[default]
    Type,
}

impl Binding {
    /// Maps a declared `apiContract:binding` value. Locations without
    /// dedicated handling (cookie, body) are treated as `Type`.
    pub fn from_declared(binding: Option<&str>) -> Self {
        match binding {
            Some("header") => Binding::Header,
            Some("query") => Binding::Query,
            Some("path") => Binding::Path,
            _ => Binding::Type,
        }
    }

    /// Separator between a parameter name and its value in example strings
    /// (`Name: value` headers, `name=value` query pairs).
    pub fn value_delimiter(&self) -> Option<char> {
        match self {
            Binding::Header => Some(':'),
            Binding::Query => Some('='),
            Binding::Path | Binding::Type => None,
        }
    }

    /// Only query values arrive URL-encoded.
    pub fn decodes_values(&self) -> bool {
        matches!(self, Binding::Query)
    }

    /// The value forced onto `null`-typed items.
    pub fn nil_sentinel(&self) -> &'static str {
        match self {
            Binding::Header | Binding::Query | Binding::Path => "nil",
            Binding::Type => "null",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Binding::Header => "header",
            Binding::Query => "query",
            Binding::Path => "path",
            Binding::Type => "type",
        };
        f.write_str(name)
    }
}
