use std::io;
use thiserror::Error;

/// Result type alias for gq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the gq digraph query tool.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading an input file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input file given on the command line does not exist.
    #[error("{path} does not exist")]
    FileNotFound { path: String },

    /// A line of an input file could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The same vertex was defined twice in a graph file.
    #[error("line {line}: vertex {vertex} is defined more than once")]
    DuplicateVertex { vertex: String, line: usize },

    /// An edge weight was negative or not finite.
    #[error(
        "line {line}: edge from {vertex} has invalid weight {weight} (weights must be finite and non-negative)"
    )]
    InvalidWeight {
        vertex: String,
        weight: f64,
        line: usize,
    },

    /// The declared vertex count does not match the number of definitions.
    #[error("graph declares {declared} vertices but defines {actual}")]
    VertexCountMismatch { declared: usize, actual: usize },

    /// A priority-queue operation was attempted on an empty queue.
    #[error("priority queue underflow")]
    Underflow,

    /// decrease-key referenced a key with no live entry in the queue.
    #[error("key {key} not found in priority queue")]
    KeyNotFound { key: String },

    /// An adjacency list references a vertex that is not in the graph.
    #[error("vertex {vertex} is not in the graph")]
    VertexNotFound { vertex: String },

    /// The graph contains a cycle, so no topological order exists.
    #[error("graph contains a cycle: only {ordered} of {total} vertices could be ordered")]
    CycleDetected { ordered: usize, total: usize },
}
