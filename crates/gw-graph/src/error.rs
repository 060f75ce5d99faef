//! Graph-specific error types.

use gw_core::GwError;

/// Structural inconsistencies detected when validating a built graph.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The id lookup table disagrees with the slot list.
    LookupMismatch { id: String },

    /// The adjacency table does not have one entry per node.
    AdjacencyLength { nodes: usize, rows: usize },

    /// An adjacency record points at a slot that does not exist.
    DanglingTarget { from: String, slot: usize },

    /// An undirected graph holds a record without its mirror.
    Asymmetric { from: String, to: String },

    /// An edge carries a NaN or infinite weight.
    NonFiniteWeight { from: String, to: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::LookupMismatch { id } => {
                write!(f, "Node {} is not registered at its own slot", id)
            }
            GraphError::AdjacencyLength { nodes, rows } => {
                write!(f, "Graph has {} nodes but {} adjacency rows", nodes, rows)
            }
            GraphError::DanglingTarget { from, slot } => {
                write!(f, "Node {} has an edge to missing slot {}", from, slot)
            }
            GraphError::Asymmetric { from, to } => {
                write!(
                    f,
                    "Undirected edge {} -> {} has no matching {} -> {}",
                    from, to, to, from
                )
            }
            GraphError::NonFiniteWeight { from, to } => {
                write!(f, "Edge {} -> {} has a non-finite weight", from, to)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for GwError {
    fn from(err: GraphError) -> Self {
        GwError::Invariant {
            what: err.to_string(),
        }
    }
}
