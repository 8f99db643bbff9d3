//! Tests for item construction: types, constraints, value seeding and hints.
mod common;
use amf_view_model::prelude::*;
use amf_view_model::vocab::{api_contract, core, document, shacl, shapes, xsd};
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn single_item(graph: &AmfGraph, input: serde_json::Value) -> std::sync::Arc<ViewModelItem> {
    let mut engine = engine(graph);
    let items = engine
        .compute_view_model(&input)
        .expect("input should produce a view model");
    assert_eq!(items.len(), 1, "expected exactly one item");
    items[0].clone()
}

#[test]
fn test_required_integer_query_parameter_is_seeded_from_example() {
    let page = page_parameter("#/p1");
    let graph = graph_of(vec![page.clone()]);

    let item = single_item(&graph, json!([page]));

    assert_eq!(item.name, "page");
    assert_eq!(item.schema.api_type, ApiType::Integer);
    assert_eq!(item.schema.input_type, InputType::Number);
    assert_eq!(item.schema.minimum, Some(10.0));
    assert_eq!(item.schema.maximum, Some(100.0));
    assert_eq!(item.value, Some(ItemValue::from("42")));
    assert_eq!(item.schema.input_label.as_deref(), Some("page*"));
    assert_eq!(item.schema.input_placeholder.as_deref(), Some("Example: 42"));
    assert_eq!(
        item.schema.extended_description.as_deref(),
        Some("- Example: `42`")
    );
}

#[test]
fn test_header_of_nil_type_gets_read_only_sentinel() {
    let header = parameter("#/h", "X-Trace", "header", false, nil_shape("#/h/schema"));
    let graph = graph_of(vec![header.clone()]);

    let item = single_item(&graph, json!([header]));

    assert_eq!(item.schema.api_type, ApiType::Null);
    assert_eq!(item.value, Some(ItemValue::from("nil")));
    assert!(item.schema.read_only);
}

#[test]
fn test_nil_property_uses_null_sentinel() {
    let shape = node_shape(
        "#/s",
        vec![property_shape("#/s/p", "nothing", false, nil_shape("#/s/p/nil"))],
    );
    let graph = graph_of(vec![shape.clone()]);

    let item = single_item(&graph, shape);

    assert_eq!(item.value, Some(ItemValue::from("null")));
    assert!(item.schema.read_only);
}

#[test]
fn test_array_default_is_parsed_as_json_array() {
    let tags = parameter(
        "#/tags",
        "tags",
        "query",
        true,
        array_shape(
            "#/tags/schema",
            scalar_shape("#/tags/schema/items", xsd::STRING, vec![]),
            vec![(shacl::DEFAULT_VALUE_STR, lit(r#"["a","b"]"#))],
        ),
    );
    let graph = graph_of(vec![tags.clone()]);

    let item = single_item(&graph, json!([tags]));

    assert!(item.schema.is_array);
    assert_eq!(item.schema.items, Some(ApiType::String));
    assert_eq!(item.schema.input_type, InputType::Text);
    assert_eq!(
        item.value,
        Some(ItemValue::List(vec![Value::from("a"), Value::from("b")]))
    );
}

#[test]
fn test_structured_array_default_wins_over_default_string() {
    let shape = node_shape(
        "#/s",
        vec![property_shape(
            "#/s/ids",
            "ids",
            true,
            array_shape(
                "#/s/ids/array",
                scalar_shape("#/s/ids/array/items", xsd::STRING, vec![]),
                vec![
                    (shacl::DEFAULT_VALUE_STR, lit("- x\n- y")),
                    (shacl::DEFAULT_VALUE, data_array(&["x", "y"])),
                ],
            ),
        )],
    );
    let graph = graph_of(vec![shape.clone()]);

    let item = single_item(&graph, shape);

    assert_eq!(
        item.schema.default_value,
        Some(ItemValue::List(vec![Value::from("x"), Value::from("y")]))
    );
    assert_eq!(item.value, item.schema.default_value);
}

#[test]
fn test_required_array_without_default_is_seeded_with_empty_entry() {
    let ids = parameter(
        "#/ids",
        "ids",
        "query",
        true,
        array_shape(
            "#/ids/schema",
            scalar_shape("#/ids/schema/items", xsd::INTEGER, vec![]),
            vec![],
        ),
    );
    let graph = graph_of(vec![ids.clone()]);

    let item = single_item(&graph, json!([ids]));

    assert_eq!(item.value, Some(ItemValue::List(vec![Value::from("")])));
    assert_eq!(item.schema.input_type, InputType::Number);
}

#[test]
fn test_date_property_gets_pattern_and_placeholder() {
    let shape = node_shape(
        "#/s",
        vec![property_shape(
            "#/s/birthday",
            "birthday",
            false,
            scalar_shape("#/s/birthday/date", xsd::DATE, vec![]),
        )],
    );
    let graph = graph_of(vec![shape.clone()]);

    let item = single_item(&graph, shape);

    assert_eq!(item.schema.api_type, ApiType::Date);
    assert_eq!(item.schema.input_type, InputType::Date);
    assert_eq!(
        item.schema.pattern.as_deref(),
        Some("^[0-9]{4}-[0-9]{2}-[0-9]{2}$")
    );
    assert_eq!(item.schema.input_placeholder.as_deref(), Some("0000-00-00"));
    assert_eq!(item.value, None);
}

#[test]
fn test_rfc2616_datetime_has_no_pattern() {
    let shape = node_shape(
        "#/s",
        vec![property_shape(
            "#/s/since",
            "since",
            false,
            scalar_shape(
                "#/s/since/dt",
                xsd::DATE_TIME,
                vec![(shapes::FORMAT, lit("rfc2616"))],
            ),
        )],
    );
    let graph = graph_of(vec![shape.clone()]);

    let item = single_item(&graph, shape);

    assert_eq!(item.schema.api_type, ApiType::DateTime);
    assert_eq!(item.schema.pattern.as_deref(), Some(""));
    assert_eq!(
        item.schema.input_placeholder.as_deref(),
        Some("Sun, 01 Jan 2000 00:00:00 GMT")
    );
}

#[test]
fn test_nillable_union_detection() {
    let nillable = union_shape(
        "#/u1",
        vec![
            scalar_shape("#/u1/s", xsd::STRING, vec![]),
            nil_shape("#/u1/nil"),
        ],
    );
    let plain = union_shape(
        "#/u2",
        vec![
            scalar_shape("#/u2/s", xsd::STRING, vec![]),
            scalar_shape("#/u2/i", xsd::INTEGER, vec![]),
        ],
    );
    let shape = node_shape(
        "#/s",
        vec![
            property_shape("#/s/a", "a", false, nillable),
            property_shape("#/s/b", "b", false, plain),
            property_shape("#/s/c", "c", false, scalar_shape("#/s/c/s", xsd::STRING, vec![])),
        ],
    );
    let graph = graph_of(vec![shape.clone()]);
    let mut engine = engine(&graph);

    let items = engine.compute_view_model(&shape).unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].schema.api_type, ApiType::Union);
    assert!(items[0].schema.is_nillable);
    assert!(!items[1].schema.is_nillable);
    assert!(!items[2].schema.is_nillable);
}

#[test]
fn test_boolean_default_is_stringified() {
    let shape = node_shape(
        "#/s",
        vec![property_shape(
            "#/s/active",
            "active",
            false,
            scalar_shape(
                "#/s/active/b",
                xsd::BOOLEAN,
                vec![(shacl::DEFAULT_VALUE_STR, lit("true"))],
            ),
        )],
    );
    let graph = graph_of(vec![shape.clone()]);

    let item = single_item(&graph, shape);

    assert!(item.schema.is_bool);
    assert_eq!(item.schema.input_type, InputType::Boolean);
    assert_eq!(item.schema.default_value, Some(ItemValue::Scalar(Value::Bool(true))));
    assert_eq!(item.value, Some(ItemValue::from("true")));
}

#[test]
fn test_numeric_default_seeds_required_item() {
    let limit = parameter(
        "#/limit",
        "limit",
        "query",
        true,
        scalar_shape(
            "#/limit/schema",
            xsd::INTEGER,
            vec![(shacl::DEFAULT_VALUE_STR, lit("20"))],
        ),
    );
    let graph = graph_of(vec![limit.clone()]);

    let item = single_item(&graph, json!([limit]));

    assert_eq!(item.schema.default_value, Some(ItemValue::from(Value::from(20.0))));
    assert_eq!(item.value, Some(ItemValue::from(Value::from(20.0))));
}

#[test]
fn test_required_enum_is_seeded_from_first_member() {
    let sort = parameter(
        "#/sort",
        "sort",
        "query",
        true,
        scalar_shape(
            "#/sort/schema",
            xsd::STRING,
            vec![(shacl::IN, enum_list(&["asc", "desc"]))],
        ),
    );
    let graph = graph_of(vec![sort.clone()]);

    let item = single_item(&graph, json!([sort]));

    assert_eq!(
        item.schema.enum_values,
        Some(vec![Value::from("asc"), Value::from("desc")])
    );
    assert_eq!(item.value, Some(ItemValue::from("asc")));
}

#[test]
fn test_query_example_is_stripped_and_decoded() {
    let q = parameter(
        "#/q",
        "q",
        "query",
        true,
        scalar_shape(
            "#/q/schema",
            xsd::STRING,
            vec![(
                api_contract::EXAMPLES,
                json!([example("#/q/example", Some("search"), "q=hello+big%20world")]),
            )],
        ),
    );
    let graph = graph_of(vec![q.clone()]);

    let item = single_item(&graph, json!([q]));

    assert_eq!(item.value, Some(ItemValue::from("hello big world")));
    assert_eq!(
        item.schema.input_placeholder.as_deref(),
        Some("Example: hello big world")
    );
    assert_eq!(
        item.schema.extended_description.as_deref(),
        Some("- Example search: `q=hello+big%20world`")
    );
}

#[test]
fn test_query_example_with_malformed_escape_is_kept_raw() {
    let q = parameter(
        "#/q",
        "q",
        "query",
        true,
        scalar_shape(
            "#/q/schema",
            xsd::STRING,
            vec![(
                api_contract::EXAMPLES,
                json!([example("#/q/example", None, "q=a+b%ZZ")]),
            )],
        ),
    );
    let graph = graph_of(vec![q.clone()]);

    let item = single_item(&graph, json!([q]));

    assert_eq!(item.value, Some(ItemValue::from("a+b%ZZ")));
    assert_eq!(
        item.schema.input_placeholder.as_deref(),
        Some("Example: a+b%ZZ")
    );
}

#[test]
fn test_header_example_prefix_is_stripped() {
    let key = parameter(
        "#/key",
        "X-Api-Key",
        "header",
        true,
        scalar_shape(
            "#/key/schema",
            xsd::STRING,
            vec![(
                api_contract::EXAMPLES,
                json!([example("#/key/example", None, "X-Api-Key: abc+123")]),
            )],
        ),
    );
    let graph = graph_of(vec![key.clone()]);

    let item = single_item(&graph, json!([key]));

    assert_eq!(item.value, Some(ItemValue::from("abc+123")));
}

#[test]
fn test_description_and_extended_description() {
    let q = node(
        "#/q",
        &[api_contract::PARAMETER],
        vec![
            (api_contract::PARAM_NAME, lit("q")),
            (api_contract::BINDING, lit("query")),
            (core::DESCRIPTION, lit("Search query")),
            (
                shapes::SCHEMA,
                json!([scalar_shape(
                    "#/q/schema",
                    xsd::STRING,
                    vec![(shacl::PATTERN, lit("^[a-z]+$"))]
                )]),
            ),
        ],
    );
    let graph = graph_of(vec![q.clone()]);

    let item = single_item(&graph, json!([q]));

    assert_eq!(item.schema.description.as_deref(), Some("Search query"));
    assert_eq!(
        item.schema.extended_description.as_deref(),
        Some("Search query\n\n\n- Pattern: `^[a-z]+$`")
    );
    assert_eq!(item.schema.input_label.as_deref(), Some("q"));
}

#[test]
fn test_no_docs_skips_examples_and_descriptions() {
    let page = page_parameter("#/p1");
    let graph = graph_of(vec![page.clone()]);
    let mut engine = ApiViewModel::builder(&graph).no_docs(true).build();

    let items = engine.compute_view_model(&json!([page])).unwrap();
    let item = &items[0];

    assert_eq!(item.schema.examples, None);
    assert_eq!(item.schema.description, None);
    assert_eq!(item.schema.extended_description, None);
    assert_eq!(item.schema.input_placeholder, None);
    assert_eq!(item.value, None);
}

#[test]
fn test_examples_for_other_media_types_are_skipped() {
    let xml_example = node(
        "#/e/xml",
        &["http://a.ml/vocabularies/apiContract#Example"],
        vec![
            (document::RAW, lit("<id>1</id>")),
            (core::MEDIA_TYPE, lit("application/xml")),
        ],
    );
    let shape = node_shape(
        "#/s",
        vec![property_shape(
            "#/s/id",
            "id",
            false,
            scalar_shape(
                "#/s/id/s",
                xsd::STRING,
                vec![(api_contract::EXAMPLES, json!([xml_example]))],
            ),
        )],
    );
    let graph = graph_of(vec![shape.clone()]);

    let mut json_engine = ApiViewModel::new(&graph);
    let item = &json_engine.compute_view_model(&shape).unwrap()[0];
    assert_eq!(item.schema.examples, None);

    let mut xml_engine = ApiViewModel::builder(&graph)
        .media_type("application/xml")
        .build();
    let item = &xml_engine.compute_view_model(&shape).unwrap()[0];
    assert_eq!(
        item.schema.examples,
        Some(vec![Example::new(None, "<id>1</id>")])
    );
}

#[test]
fn test_custom_example_generator_is_used() {
    struct Fixed;
    impl ExampleGenerator for Fixed {
        fn compute_examples(
            &self,
            _: &AmfGraph,
            _: &serde_json::Value,
            _: &str,
        ) -> Vec<Example> {
            vec![Example::new(Some("generated".to_string()), "7")]
        }
    }

    let page = page_parameter("#/p1");
    let graph = graph_of(vec![page.clone()]);
    let mut engine = ApiViewModel::builder(&graph)
        .with_example_generator(Box::new(Fixed))
        .build();

    let item = &engine.compute_view_model(&json!([page])).unwrap()[0];

    assert_eq!(item.value, Some(ItemValue::from("7")));
    assert_eq!(item.schema.input_placeholder.as_deref(), Some("Example: 7"));
}

#[test]
fn test_no_examples_generator() {
    let page = page_parameter("#/p1");
    let graph = graph_of(vec![page.clone()]);
    let mut engine = ApiViewModel::builder(&graph)
        .with_example_generator(Box::new(NoExamples))
        .build();

    let item = &engine.compute_view_model(&json!([page])).unwrap()[0];

    assert_eq!(item.schema.examples, None);
    assert_eq!(item.value, None);
}

#[test]
fn test_no_auto_encoding_annotation() {
    let schema = scalar_shape(
        "#/raw/schema",
        xsd::STRING,
        vec![
            (document::CUSTOM_DOMAIN_PROPERTIES, id_ref("#/raw/schema/ext")),
            (
                "amf://id#/raw/schema/ext",
                json!({
                    "@id": "#/raw/schema/ext/value",
                    (core::EXTENSION_NAME): [{ "@value": "no-auto-encoding" }]
                }),
            ),
        ],
    );
    let raw = parameter("#/raw", "filter", "query", false, schema);
    let plain = page_parameter("#/p1");
    let graph = graph_of(vec![raw.clone(), plain.clone()]);
    let mut engine = engine(&graph);

    let items = engine.compute_view_model(&json!([raw, plain])).unwrap();

    assert!(items[0].schema.no_auto_encode);
    assert!(!items[1].schema.no_auto_encode);
}

#[test]
fn test_file_property_lists_file_types() {
    let file = node(
        "#/s/avatar/file",
        &[shapes::FILE_SHAPE],
        vec![(shapes::FILE_TYPE, json!([{ "@value": "image/png" }, { "@value": "image/jpeg" }]))],
    );
    let shape = node_shape(
        "#/s",
        vec![property_shape("#/s/avatar", "avatar", false, file)],
    );
    let graph = graph_of(vec![shape.clone()]);

    let item = single_item(&graph, shape);

    assert_eq!(item.schema.api_type, ApiType::File);
    assert!(item.schema.is_file);
    assert_eq!(
        item.schema.file_types,
        Some(vec!["image/png".to_string(), "image/jpeg".to_string()])
    );
}

#[test]
fn test_object_property_has_nested_items() {
    let address = node_shape(
        "#/Address",
        vec![
            property_shape(
                "#/Address/street",
                "street",
                true,
                scalar_shape("#/Address/street/s", xsd::STRING, vec![]),
            ),
            property_shape(
                "#/Address/zip",
                "zip",
                false,
                scalar_shape("#/Address/zip/s", xsd::INTEGER, vec![]),
            ),
        ],
    );
    let person = node_shape(
        "#/Person",
        vec![property_shape("#/Person/address", "address", false, address)],
    );
    let graph = graph_of(vec![person.clone()]);

    let item = single_item(&graph, person);

    assert!(item.schema.is_object);
    let street = item.property("street").expect("street should be nested");
    assert_eq!(street.schema.input_label.as_deref(), Some("street*"));
    let zip = item.property("zip").expect("zip should be nested");
    assert_eq!(zip.schema.api_type, ApiType::Integer);
}

#[test]
fn test_property_without_range_is_skipped() {
    let broken = node(
        "#/s/broken",
        &[shacl::PROPERTY_SHAPE],
        vec![(shacl::NAME, lit("broken"))],
    );
    let shape = node_shape(
        "#/s",
        vec![
            broken,
            property_shape("#/s/ok", "ok", false, scalar_shape("#/s/ok/s", xsd::STRING, vec![])),
        ],
    );
    let graph = graph_of(vec![shape.clone()]);

    let item = single_item(&graph, shape);

    assert_eq!(item.name, "ok");
}

#[test]
fn test_build_property_without_graph_traversal() {
    let graph = graph_of(vec![]);
    let engine = engine(&graph);

    let mut defaults = ViewModelItem::new("");
    defaults.schema.api_type = ApiType::Time;
    defaults.schema.required = true;
    let item = engine.build_property(defaults, Some(Binding::Query));

    assert_eq!(item.schema.input_label.as_deref(), Some("Parameter value"));
    assert_eq!(item.schema.input_placeholder.as_deref(), Some("00:00:00.000"));
    assert_eq!(item.schema.input_type, InputType::Text);
    assert!(item.schema.pattern.is_some());

    let mut custom = ViewModelItem::new("flags");
    custom.schema.api_type = ApiType::Array;
    custom.schema.is_custom = true;
    let item = engine.build_property(custom, None);

    assert!(item.schema.is_array);
    assert!(item.schema.is_custom);
    assert_eq!(item.schema.input_label.as_deref(), Some("flags"));
    assert_eq!(item.value, Some(ItemValue::List(vec![Value::from("")])));
}

#[test]
fn test_display_name_is_used_for_label() {
    let shape = node_shape(
        "#/s",
        vec![property_shape(
            "#/s/q",
            "q",
            true,
            scalar_shape("#/s/q/s", xsd::STRING, vec![(core::NAME, lit("Query"))]),
        )],
    );
    let graph = graph_of(vec![shape.clone()]);

    let item = single_item(&graph, shape);

    assert_eq!(item.schema.input_label.as_deref(), Some("Query*"));
}
