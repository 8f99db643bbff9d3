use crate::cache::ResolutionCache;
use crate::classifier;
use crate::error::ConfigError;
use crate::examples::{DeclaredExamples, ExampleGenerator};
use crate::graph::AmfGraph;
use crate::model::{Binding, Example, ViewModelItem};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

mod item;
pub mod post;
mod raw;
mod walker;

pub use post::{ProcessOptions, example_as_value, extended_description, parse_array_example};

/// Object properties nested deeper than this are not expanded. Guards against
/// self-referencing types that were not cut by the API resolver.
const MAX_NESTING: usize = 32;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// Skip examples, descriptions and extended descriptions.
    pub no_docs: bool,
    /// Media type passed to the example generator.
    pub media_type: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            no_docs: false,
            media_type: "application/json".to_string(),
        }
    }
}

impl EngineOptions {
    /// Reads options from a JSON object such as `{"noDocs": true}`. Missing
    /// fields keep their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }
}

/// Transforms nodes of an [`AmfGraph`] into form view model items.
///
/// The engine owns its [`ResolutionCache`]: structurally identical parameters
/// seen in one session resolve to the same `Arc`. Use a fresh engine, or
/// [`ApiViewModel::clear_cache`], for independent runs.
pub struct ApiViewModel<'g> {
    graph: &'g AmfGraph,
    options: EngineOptions,
    generator: Box<dyn ExampleGenerator>,
    cache: ResolutionCache,
    depth: usize,
    /// Set while building an item whose nested properties were cut at [`MAX_NESTING`].
    truncated: bool,
}

pub struct ApiViewModelBuilder<'g> {
    graph: &'g AmfGraph,
    options: EngineOptions,
    generator: Box<dyn ExampleGenerator>,
}

impl<'g> ApiViewModelBuilder<'g> {
    pub fn new(graph: &'g AmfGraph) -> Self {
        Self {
            graph,
            options: EngineOptions::default(),
            generator: Box::new(DeclaredExamples),
        }
    }
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }
    pub fn no_docs(mut self, no_docs: bool) -> Self {
        self.options.no_docs = no_docs;
        self
    }
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.options.media_type = media_type.into();
        self
    }
    pub fn with_example_generator(mut self, generator: Box<dyn ExampleGenerator>) -> Self {
        self.generator = generator;
        self
    }
    pub fn build(self) -> ApiViewModel<'g> {
        ApiViewModel {
            graph: self.graph,
            options: self.options,
            generator: self.generator,
            cache: ResolutionCache::new(),
            depth: 0,
            truncated: false,
        }
    }
}

impl<'g> ApiViewModel<'g> {
    pub fn builder(graph: &'g AmfGraph) -> ApiViewModelBuilder<'g> {
        ApiViewModelBuilder::new(graph)
    }

    /// An engine with default options and the declared-examples generator.
    pub fn new(graph: &'g AmfGraph) -> Self {
        Self::builder(graph).build()
    }

    pub fn graph(&self) -> &'g AmfGraph {
        self.graph
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Forgets every computed item so that the next run rebuilds them.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Builds an item without traversing the graph, for custom fields.
    ///
    /// Type flags, input type, pattern and label are derived from the given
    /// schema; the value is then finalized like any other item.
    pub fn build_property(
        &self,
        defaults: ViewModelItem,
        binding: Option<Binding>,
    ) -> ViewModelItem {
        let mut item = defaults;
        let schema = &mut item.schema;
        schema.sync_type_flags();
        schema.input_type = classifier::input_type(schema.api_type, schema.items);
        schema.pattern =
            classifier::type_pattern(schema.api_type, schema.pattern.take(), schema.format.as_deref());
        if schema.input_label.is_none() {
            schema.input_label = Some(if item.name.is_empty() {
                "Parameter value".to_string()
            } else {
                item.name.clone()
            });
        }
        post::finalize(
            item,
            binding.unwrap_or_default(),
            &ProcessOptions::plain(),
            !self.options.no_docs,
        )
    }

    fn with_docs(&self) -> bool {
        !self.options.no_docs
    }

    fn examples_for(&self, shape: &JsonValue) -> Vec<Example> {
        self.generator
            .compute_examples(self.graph, shape, &self.options.media_type)
    }
}
