use super::ApiViewModel;
use crate::graph::AmfGraph;
use crate::model::ViewModelItem;
use crate::vocab::{api_contract, data, shacl, shapes};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::trace;

/// What [`ApiViewModel::compute_view_model`] was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkTarget {
    List,
    RawAnnotation,
    NodeShape,
    ScalarShape,
    Union,
    Unrecognized,
}

impl WalkTarget {
    fn of(graph: &AmfGraph, input: &JsonValue) -> Self {
        if input.is_array() {
            WalkTarget::List
        } else if graph.has_type(input, data::OBJECT) {
            WalkTarget::RawAnnotation
        } else if graph.has_type(input, shacl::NODE_SHAPE) {
            WalkTarget::NodeShape
        } else if graph.has_type(input, shapes::SCALAR_SHAPE) {
            WalkTarget::ScalarShape
        } else if graph.has_type(input, shapes::UNION_SHAPE) {
            WalkTarget::Union
        } else {
            WalkTarget::Unrecognized
        }
    }
}

/// The node kinds that become a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Parameter,
    PropertyShape,
}

impl ItemKind {
    fn of(graph: &AmfGraph, node: &JsonValue) -> Option<Self> {
        if graph.has_type(node, api_contract::PARAMETER) {
            Some(ItemKind::Parameter)
        } else if graph.has_type(node, shacl::PROPERTY_SHAPE) {
            Some(ItemKind::PropertyShape)
        } else {
            None
        }
    }
}

impl<'g> ApiViewModel<'g> {
    /// Transforms a parameter list, node shape, scalar shape, union shape or
    /// raw annotation object into view model items.
    ///
    /// Returns `None` for a `null` input. Inputs of any other kind produce an
    /// empty list. The input is only read; the returned list is independent
    /// of it.
    pub fn compute_view_model(&mut self, input: &JsonValue) -> Option<Vec<Arc<ViewModelItem>>> {
        if input.is_null() {
            return None;
        }
        let graph = self.graph;
        let target = WalkTarget::of(graph, input);
        trace!(?target, "computing view model");

        let items = match target {
            WalkTarget::List => input
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|item| self.ui_model_for_amf_item(item))
                .collect(),
            WalkTarget::RawAnnotation => self.model_for_raw_object(input),
            WalkTarget::NodeShape => {
                let shape = graph.resolve(input);
                self.properties_of(shape)
            }
            WalkTarget::ScalarShape => self.property_shape_item(input).into_iter().collect(),
            WalkTarget::Union => {
                let union = graph.resolve(input);
                let mut items = Vec::new();
                for branch in graph.nodes(union, shapes::ANY_OF) {
                    items.extend(self.properties_of(graph.resolve(branch)));
                }
                items
            }
            WalkTarget::Unrecognized => Vec::new(),
        };
        Some(items)
    }

    /// Builds the item for a single `Parameter` or `PropertyShape` node.
    /// Other nodes produce `None`.
    pub fn ui_model_for_amf_item(&mut self, node: &JsonValue) -> Option<Arc<ViewModelItem>> {
        let graph = self.graph;
        let node = match node {
            JsonValue::Array(items) => items.first()?,
            other => other,
        };
        let node = graph.resolve(node);
        match ItemKind::of(graph, node) {
            Some(ItemKind::Parameter) => Some(self.parameter_item(node)),
            Some(ItemKind::PropertyShape) => self.property_shape_item(node),
            None => {
                trace!(id = ?graph.id_of(node), "node is neither a parameter nor a property shape");
                None
            }
        }
    }

    pub(super) fn properties_of(&mut self, shape: &JsonValue) -> Vec<Arc<ViewModelItem>> {
        let graph = self.graph;
        graph
            .nodes(shape, shacl::PROPERTY)
            .into_iter()
            .filter_map(|property| self.ui_model_for_amf_item(property))
            .collect()
    }
}
