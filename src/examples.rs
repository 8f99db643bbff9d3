use crate::graph::AmfGraph;
use crate::model::{Example, ItemValue, Value};
use crate::vocab::{api_contract, core, document};
use serde_json::Value as JsonValue;

/// Produces example values for a shape.
///
/// This is the extension point for plugging in a full example generator
/// (one that synthesizes values from the shape's structure). The engine calls
/// it once per built item unless documentation is disabled.
pub trait ExampleGenerator: Send + Sync {
    fn compute_examples(&self, graph: &AmfGraph, shape: &JsonValue, media_type: &str)
    -> Vec<Example>;
}

/// Reads the examples declared on a shape (`apiContract:examples`).
///
/// The label comes from `core:name`, the value from the example's raw text,
/// falling back to its structured value. Examples declared for another media
/// type are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredExamples;

impl ExampleGenerator for DeclaredExamples {
    fn compute_examples(
        &self,
        graph: &AmfGraph,
        shape: &JsonValue,
        media_type: &str,
    ) -> Vec<Example> {
        graph
            .nodes(shape, api_contract::EXAMPLES)
            .into_iter()
            .map(|node| graph.resolve(node))
            .filter(|node| {
                graph
                    .str_value(node, core::MEDIA_TYPE)
                    .is_none_or(|declared| declared == media_type)
            })
            .map(|node| Example {
                name: graph.str_value(node, core::NAME).map(str::to_string),
                value: example_value(graph, node),
            })
            .collect()
    }
}

fn example_value(graph: &AmfGraph, node: &JsonValue) -> Option<ItemValue> {
    if let Some(raw) = graph.str_value(node, document::RAW) {
        return Some(ItemValue::Scalar(Value::Str(raw.to_string())));
    }
    graph
        .first(node, document::STRUCTURED_VALUE)
        .or_else(|| graph.first(node, api_contract::STRUCTURED_VALUE))
        .and_then(|structured| graph.data_value(structured))
}

/// Never produces examples.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExamples;

impl ExampleGenerator for NoExamples {
    fn compute_examples(&self, _: &AmfGraph, _: &JsonValue, _: &str) -> Vec<Example> {
        Vec::new()
    }
}
