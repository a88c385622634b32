//! Defines the error type shared by graph construction and cycle searches.
use thiserror::Error;

/// Failures that stop an operation.
///
/// A search that finds no cycle is not an error; see `analysis::SearchOutcome`.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Start vertex '{0}' is not in the graph")]
    UnknownStartVertex(String),
    #[error("Edge references unknown vertex '{0}'")]
    UnknownVertex(String),
    #[error("Vertex '{0}' is defined more than once")]
    DuplicateVertex(String),
    #[error("Invalid vertex id {0}")]
    InvalidVertexId(u32),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
