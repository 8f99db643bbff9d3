use thiserror::Error;

/// Errors that can occur while loading an API description graph.
///
/// The view model transformation itself never fails: incomplete or
/// unrecognized nodes are skipped. Only getting a document into memory can.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("Failed to parse API model JSON: {0}")]
    JsonParseError(String),

    #[error("API model root must be a JSON-LD object or array, found {found}")]
    InvalidDocument { found: &'static str },

    #[error("Node '{0}' not found in the API model")]
    NodeNotFound(String),
}

/// Errors that can occur while reading engine options from a configuration source.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}
