//! gw-graph: graph model layer for graphwalk.
//!
//! Provides:
//! - Adjacency-list graph keyed by string node ids (directed or undirected)
//! - Builder that validates adjacency invariants before handing out a graph
//! - Breadth-first and depth-first traversal with parent/distance tracking
//! - Adjacency-list and adjacency-matrix projections
//! - The five-node reference graph used throughout the tests
//!
//! # Example
//!
//! ```
//! use gw_graph::Graph;
//!
//! let mut graph = Graph::new(false);
//! graph.add_edge("A", "B");
//! graph.add_edge("A", "C");
//!
//! let bfs = graph.bfs("A");
//! assert_eq!(bfs.order, ["A", "B", "C"]);
//! assert_eq!(bfs.distance["C"], 1);
//! assert_eq!(graph.neighbors("B"), ["A"]);
//! ```

pub mod builder;
pub mod error;
pub mod fixture;
pub mod graph;
pub mod repr;
pub mod traversal;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use fixture::{SAMPLE_EDGES, sample_graph};
pub use graph::{Edge, Graph};
pub use gw_core::NodeIdx;
pub use repr::{AdjacencyList, AdjacencyMatrix};
pub use traversal::{BfsResult, DfsResult};
