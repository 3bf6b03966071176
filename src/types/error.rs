//! Error types for the graph-stepper library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the graph-stepper library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NotFound(NodeId),

    /// No edge between the two nodes.
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: NodeId, to: NodeId },

    /// Adjacency-list document is structurally wrong.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Import aborted while parsing or resolving the document.
    #[error("Import failed: {0}")]
    ImportFailed(String),

    /// Missing or unusable input such as a traversal start node.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph-stepper operations.
pub type GraphResult<T> = Result<T, GraphError>;
