//! # amf-view-model - Form View Models from AMF API Graphs
//!
//! **amf-view-model** turns the parameters and shapes of an API description,
//! given as an AMF JSON-LD graph, into flat form items: one entry per input
//! field with its type, constraints, default, examples, input hints and an
//! initial value that is ready to be edited.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Graph**: Parse an AMF document (expanded or compact JSON-LD)
//!     with [`AmfGraph::from_json`](graph::AmfGraph::from_json).
//! 2.  **Configure the Engine**: Use [`ApiViewModel::builder`](builder::ApiViewModel::builder)
//!     to pick the media type for examples, skip documentation, or plug in a
//!     custom [`ExampleGenerator`](examples::ExampleGenerator).
//! 3.  **Transform**: Call `compute_view_model` with a parameter list, a node
//!     shape, a scalar shape, a union shape or a raw annotation object.
//!     Identical parameters seen again in the same session come out of the
//!     engine's [`ResolutionCache`](cache::ResolutionCache).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use amf_view_model::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let source = std::fs::read_to_string("api-model.json")?;
//!     let graph = AmfGraph::from_json(&source)?;
//!
//!     // A declared type, or a list of parameters read from an operation.
//!     let shape = graph.require_node("#/declares/shape/SearchFilter")?;
//!
//!     let mut engine = ApiViewModel::builder(&graph)
//!         .media_type("application/json")
//!         .build();
//!
//!     if let Some(items) = engine.compute_view_model(shape) {
//!         for item in items {
//!             println!("{} ({}): {:?}", item.name, item.schema.api_type, item.value);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod cache;
pub mod classifier;
pub mod error;
pub mod examples;
pub mod graph;
pub mod model;
pub mod prelude;
pub mod vocab;
