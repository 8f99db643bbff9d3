//! Common test utilities for building AMF graph fragments.
//!
//! Fixtures are written in expanded JSON-LD form, keyed by the full IRIs from
//! [`vocab`], unless a test says otherwise.
#![allow(dead_code)]
use amf_view_model::prelude::*;
use amf_view_model::vocab::{api_contract, core, data, document, rdfs, shacl, shapes, xsd};
use serde_json::{Map, Value as JsonValue, json};

const EXAMPLE: &str = "http://a.ml/vocabularies/apiContract#Example";

/// Builds a typed node from `(iri, value)` pairs.
pub fn node(id: &str, types: &[&str], props: Vec<(&str, JsonValue)>) -> JsonValue {
    let mut map = Map::new();
    map.insert("@id".to_string(), json!(id));
    map.insert("@type".to_string(), json!(types));
    for (key, value) in props {
        map.insert(key.to_string(), value);
    }
    JsonValue::Object(map)
}

/// A literal property value: `[{"@value": v}]`.
pub fn lit(value: impl Into<JsonValue>) -> JsonValue {
    let value: JsonValue = value.into();
    json!([{ "@value": value }])
}

/// A reference property value: `[{"@id": id}]`.
pub fn id_ref(id: &str) -> JsonValue {
    json!([{ "@id": id }])
}

pub fn scalar_shape(id: &str, datatype: &str, props: Vec<(&str, JsonValue)>) -> JsonValue {
    let mut props = props;
    props.push((shacl::DATATYPE, id_ref(datatype)));
    node(id, &[shapes::SCALAR_SHAPE], props)
}

pub fn nil_shape(id: &str) -> JsonValue {
    node(id, &[shapes::NIL_SHAPE], vec![])
}

pub fn union_shape(id: &str, branches: Vec<JsonValue>) -> JsonValue {
    node(id, &[shapes::UNION_SHAPE], vec![(shapes::ANY_OF, json!(branches))])
}

pub fn array_shape(id: &str, items: JsonValue, props: Vec<(&str, JsonValue)>) -> JsonValue {
    let mut props = props;
    props.push((shapes::ITEMS, json!([items])));
    node(id, &[shapes::ARRAY_SHAPE], props)
}

pub fn node_shape(id: &str, properties: Vec<JsonValue>) -> JsonValue {
    node(id, &[shacl::NODE_SHAPE], vec![(shacl::PROPERTY, json!(properties))])
}

/// A `sh:PropertyShape` with `sh:minCount` 1 when `required`.
pub fn property_shape(id: &str, name: &str, required: bool, range: JsonValue) -> JsonValue {
    node(
        id,
        &[shacl::PROPERTY_SHAPE],
        vec![
            (shacl::NAME, lit(name)),
            (shacl::MIN_COUNT, lit(if required { 1 } else { 0 })),
            (shapes::RANGE, json!([range])),
        ],
    )
}

/// An `apiContract:Parameter` node.
pub fn parameter(
    id: &str,
    name: &str,
    binding: &str,
    required: bool,
    schema: JsonValue,
) -> JsonValue {
    node(
        id,
        &[api_contract::PARAMETER],
        vec![
            (api_contract::PARAM_NAME, lit(name)),
            (api_contract::BINDING, lit(binding)),
            (api_contract::REQUIRED, lit(required)),
            (shapes::SCHEMA, json!([schema])),
        ],
    )
}

/// A declared example with a raw text value.
pub fn example(id: &str, name: Option<&str>, raw: &str) -> JsonValue {
    let mut props = vec![(document::RAW, lit(raw))];
    if let Some(name) = name {
        props.push((core::NAME, lit(name)));
    }
    node(id, &[EXAMPLE], props)
}

/// A `data:Scalar` literal node.
pub fn data_scalar(value: impl Into<JsonValue>, datatype: &str) -> JsonValue {
    let value: JsonValue = value.into();
    json!([{
        "@type": [data::SCALAR],
        (data::VALUE): [{ "@value": value }],
        (shacl::DATATYPE): [{ "@id": datatype }]
    }])
}

pub fn data_string(value: &str) -> JsonValue {
    data_scalar(value, xsd::STRING)
}

/// A `data:Array` literal node of string members.
pub fn data_array(values: &[&str]) -> JsonValue {
    let members: Vec<JsonValue> = values
        .iter()
        .map(|v| data_string(v)[0].clone())
        .collect();
    json!([{
        "@type": [data::ARRAY],
        (rdfs::MEMBER): members
    }])
}

/// An `sh:in` list of string values.
pub fn enum_list(values: &[&str]) -> JsonValue {
    let mut map = Map::new();
    map.insert("@id".to_string(), json!("#/enum"));
    for (i, value) in values.iter().enumerate() {
        map.insert(format!("{}_{}", rdfs::NS, i + 1), data_string(value));
    }
    json!([JsonValue::Object(map)])
}

/// Wraps fragments into a graph whose document is the given nodes.
pub fn graph_of(nodes: Vec<JsonValue>) -> AmfGraph {
    AmfGraph::new(JsonValue::Array(nodes)).expect("fixture graph should load")
}

/// An engine with documentation on and declared examples.
pub fn engine(graph: &AmfGraph) -> ApiViewModel<'_> {
    ApiViewModel::new(graph)
}

/// The integer `page` query parameter from the pagination scenario.
pub fn page_parameter(id: &str) -> JsonValue {
    parameter(
        id,
        "page",
        "query",
        true,
        scalar_shape(
            &format!("{}/schema", id),
            xsd::INTEGER,
            vec![
                (shacl::MIN_INCLUSIVE, lit(10)),
                (shacl::MAX_INCLUSIVE, lit(100)),
                (
                    api_contract::EXAMPLES,
                    json!([example(&format!("{}/example", id), None, "42")]),
                ),
            ],
        ),
    )
}

/// A compact document declaring a `SearchFilter` node shape.
pub fn compact_document() -> JsonValue {
    json!([{
        "@context": {
            "@base": "amf://id",
            "shacl": "http://www.w3.org/ns/shacl#",
            "raml-shapes": "http://a.ml/vocabularies/shapes#",
            "data": "http://a.ml/vocabularies/data#",
            "doc": "http://a.ml/vocabularies/document#",
            "apiContract": "http://a.ml/vocabularies/apiContract#",
            "core": "http://a.ml/vocabularies/core#",
            "xsd": "http://www.w3.org/2001/XMLSchema#",
            "rdfs": "http://www.w3.org/2000/01/rdf-schema#"
        },
        "@id": "",
        "@type": ["doc:Document"],
        "doc:declares": [
            {
                "@id": "#/declares/shape/SearchFilter",
                "@type": ["shacl:NodeShape"],
                "shacl:name": [{ "@value": "SearchFilter" }],
                "shacl:property": [
                    {
                        "@id": "#/declares/shape/SearchFilter/property/term",
                        "@type": ["shacl:PropertyShape"],
                        "shacl:name": [{ "@value": "term" }],
                        "shacl:minCount": [{ "@value": 1 }],
                        "raml-shapes:range": [{
                            "@id": "#/declares/shape/SearchFilter/property/term/scalar/term",
                            "@type": ["raml-shapes:ScalarShape"],
                            "shacl:datatype": [{ "@id": "xsd:string" }],
                            "core:name": [{ "@value": "Search term" }],
                            "core:description": [{ "@value": "Free text query" }],
                            "shacl:minLength": [{ "@value": 2 }]
                        }]
                    },
                    {
                        "@id": "#/declares/shape/SearchFilter/property/order",
                        "@type": ["shacl:PropertyShape"],
                        "shacl:name": [{ "@value": "order" }],
                        "shacl:minCount": [{ "@value": 0 }],
                        "raml-shapes:range": [{ "@id": "#/declares/shape/Order" }]
                    }
                ]
            },
            {
                "@id": "#/declares/shape/Order",
                "@type": ["raml-shapes:ScalarShape"],
                "shacl:datatype": [{ "@id": "xsd:string" }],
                "shacl:in": [{
                    "@id": "#/declares/shape/Order/in",
                    "rdfs:_1": [{
                        "@type": ["data:Scalar"],
                        "data:value": [{ "@value": "asc" }],
                        "shacl:datatype": [{ "@id": "xsd:string" }]
                    }],
                    "rdfs:_2": [{
                        "@type": ["data:Scalar"],
                        "data:value": [{ "@value": "desc" }],
                        "shacl:datatype": [{ "@id": "xsd:string" }]
                    }]
                }],
                "shacl:defaultValueStr": [{ "@value": "asc" }]
            }
        ]
    }])
}
