//! Prelude module for convenient imports
//!
//! Re-exports the engine, the graph accessor and the view model types.
//!
//! # Example
//!
//! ```rust,no_run
//! use amf_view_model::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = AmfGraph::from_json(&std::fs::read_to_string("path/to/model.json")?)?;
//! let shape = graph.require_node("#/declares/shape/Page")?;
//!
//! let mut engine = ApiViewModel::builder(&graph).no_docs(true).build();
//! let items = engine.compute_view_model(shape).unwrap_or_default();
//! println!("{}", serde_json::to_string_pretty(&items)?);
//! # Ok(())
//! # }
//! ```

// Engine
pub use crate::builder::{ApiViewModel, ApiViewModelBuilder, EngineOptions, ProcessOptions};
pub use crate::cache::ResolutionCache;
pub use crate::examples::{DeclaredExamples, ExampleGenerator, NoExamples};

// Graph access
pub use crate::graph::AmfGraph;
pub use crate::vocab;

// View model
pub use crate::model::{
    ApiType, Binding, Example, InputType, ItemValue, Schema, Value, ViewModelItem,
};

// Error types
pub use crate::error::{ConfigError, GraphError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
