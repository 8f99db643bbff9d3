//! Shape classification: shape-kind tags, semantic types, input kinds and the
//! fixed pattern/placeholder tables for date and time types.

use crate::graph::AmfGraph;
use crate::model::{ApiType, InputType};
use crate::vocab::{data, shacl, shapes, xsd};
use serde_json::Value as JsonValue;

/// The shape kinds the engine knows how to turn into form items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Union,
    /// Array and matrix shapes.
    Array,
    /// Node, property and tuple shapes.
    Object,
    File,
    Nil,
    Scalar,
    /// A generic `data:Object` node rather than a typed shape.
    RawAnnotation,
}

impl ShapeKind {
    /// Classifies a resolved node. Shape kinds overlap in resolved graphs, so
    /// the checks run in a fixed priority order. Returns `None` for nodes that
    /// are not shapes the engine recognizes.
    pub fn of(graph: &AmfGraph, node: &JsonValue) -> Option<Self> {
        const ORDER: &[(&str, ShapeKind)] = &[
            (shapes::UNION_SHAPE, ShapeKind::Union),
            (shapes::ARRAY_SHAPE, ShapeKind::Array),
            (shacl::NODE_SHAPE, ShapeKind::Object),
            (shacl::PROPERTY_SHAPE, ShapeKind::Object),
            (shapes::FILE_SHAPE, ShapeKind::File),
            (shapes::NIL_SHAPE, ShapeKind::Nil),
            (shapes::MATRIX_SHAPE, ShapeKind::Array),
            (shapes::TUPLE_SHAPE, ShapeKind::Object),
            (shapes::SCALAR_SHAPE, ShapeKind::Scalar),
            (data::OBJECT, ShapeKind::RawAnnotation),
        ];
        ORDER
            .iter()
            .find(|(iri, _)| graph.has_type(node, iri))
            .map(|(_, kind)| *kind)
    }
}

/// Maps a resolved shape to its semantic type.
///
/// Anything that is not a recognized non-scalar shape, including scalars with
/// an unknown datatype, is a `string`.
pub fn classify(graph: &AmfGraph, shape: &JsonValue) -> ApiType {
    match ShapeKind::of(graph, shape) {
        Some(ShapeKind::Union) => ApiType::Union,
        Some(ShapeKind::Array) => ApiType::Array,
        Some(ShapeKind::Object) => ApiType::Object,
        Some(ShapeKind::File) => ApiType::File,
        Some(ShapeKind::Nil) => ApiType::Null,
        Some(ShapeKind::Scalar) => datatype_of(graph, shape)
            .and_then(|dt| scalar_type(graph, dt))
            .unwrap_or(ApiType::String),
        Some(ShapeKind::RawAnnotation) | None => ApiType::String,
    }
}

/// The `sh:datatype` IRI of a scalar shape, compact or expanded.
pub fn datatype_of<'a>(graph: &AmfGraph, shape: &'a JsonValue) -> Option<&'a str> {
    graph
        .first(shape, shacl::DATATYPE)
        .and_then(|dt| graph.id_of(dt))
}

/// Maps a datatype IRI to a scalar semantic type.
pub fn scalar_type(graph: &AmfGraph, datatype: &str) -> Option<ApiType> {
    const DATATYPES: &[(&str, ApiType)] = &[
        (xsd::STRING, ApiType::String),
        (xsd::INTEGER, ApiType::Integer),
        (xsd::LONG, ApiType::Long),
        (xsd::FLOAT, ApiType::Float),
        (xsd::DOUBLE, ApiType::Double),
        (shapes::NUMBER, ApiType::Number),
        (xsd::BOOLEAN, ApiType::Boolean),
        (xsd::DATE_TIME, ApiType::DateTime),
        (shapes::DATE_TIME_ONLY, ApiType::DateTimeOnly),
        (xsd::TIME, ApiType::Time),
        (xsd::DATE, ApiType::Date),
        (xsd::BASE64_BINARY, ApiType::String),
        (shapes::PASSWORD, ApiType::Password),
    ];
    DATATYPES
        .iter()
        .find(|(iri, _)| graph.same_iri(datatype, iri))
        .map(|(_, api_type)| *api_type)
}

/// How a literal of the given datatype is coerced when read as a default or
/// annotation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    Boolean,
    Text,
}

pub fn literal_kind(graph: &AmfGraph, datatype: Option<&str>) -> LiteralKind {
    let Some(datatype) = datatype else {
        return LiteralKind::Text;
    };
    const NUMERIC: &[&str] = &[
        xsd::NUMBER,
        shapes::NUMBER,
        xsd::LONG,
        xsd::INTEGER,
        xsd::FLOAT,
        xsd::DOUBLE,
    ];
    if NUMERIC.iter().any(|iri| graph.same_iri(datatype, iri)) {
        LiteralKind::Number
    } else if graph.same_iri(datatype, xsd::BOOLEAN) {
        LiteralKind::Boolean
    } else {
        LiteralKind::Text
    }
}

/// Input kind for an item. Arrays use their element type.
pub fn input_type(api_type: ApiType, items: Option<ApiType>) -> InputType {
    match api_type {
        ApiType::Array => items.map_or(InputType::Text, input_type_for),
        other => input_type_for(other),
    }
}

fn input_type_for(api_type: ApiType) -> InputType {
    match api_type {
        t if t.is_numeric() => InputType::Number,
        ApiType::Boolean => InputType::Boolean,
        ApiType::Date => InputType::Date,
        // Time is rendered as plain text.
        _ => InputType::Text,
    }
}

const RFC2616: &str = "rfc2616";

/// The declared pattern, or the built-in one for date and time types.
pub fn type_pattern(
    api_type: ApiType,
    declared: Option<String>,
    format: Option<&str>,
) -> Option<String> {
    if declared.as_deref().is_some_and(|p| !p.is_empty()) {
        return declared;
    }
    let pattern = match api_type {
        ApiType::Time => r"^[0-9]{2}:[0-9]{2}:[0-9]{2}\.?[0-9]{0,3}$",
        ApiType::Date => r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$",
        ApiType::DateTimeOnly => {
            r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.?[0-9]{0,3}$"
        }
        ApiType::DateTime if format == Some(RFC2616) => "",
        ApiType::DateTime => r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}.*$",
        _ => return declared,
    };
    Some(pattern.to_string())
}

/// Placeholder text for date and time inputs.
pub fn type_placeholder(api_type: ApiType, format: Option<&str>) -> Option<&'static str> {
    match api_type {
        ApiType::Time => Some("00:00:00.000"),
        ApiType::Date => Some("0000-00-00"),
        ApiType::DateTimeOnly => Some("0000-00-00T00:00:00.000"),
        ApiType::DateTime if format == Some(RFC2616) => Some("Sun, 01 Jan 2000 00:00:00 GMT"),
        ApiType::DateTime => Some("0000-00-00T00:00:00Z+01:00"),
        _ => None,
    }
}
