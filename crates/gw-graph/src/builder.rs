//! Incremental graph builder.

use gw_core::{GwResult, Weight};

use crate::graph::Graph;
use crate::validate;

/// Builder for assembling a graph from a description.
///
/// Use `node`, `edge` and `weighted_edge` to describe the graph,
/// then call `build()` to validate it and hand out the `Graph`.
#[derive(Debug)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create a builder for an undirected or directed graph.
    pub fn new(directed: bool) -> Self {
        Self {
            graph: Graph::new(directed),
        }
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Declare a node; fixes its position in `nodes()` if not seen before.
    pub fn node(&mut self, id: &str) -> &mut Self {
        self.graph.add_node(id);
        self
    }

    /// Add an edge of weight 1.
    pub fn edge(&mut self, u: &str, v: &str) -> &mut Self {
        self.graph.add_edge(u, v);
        self
    }

    pub fn weighted_edge(&mut self, u: &str, v: &str, weight: Weight) -> &mut Self {
        self.graph.add_weighted_edge(u, v, weight);
        self
    }

    /// Validate and return the graph.
    pub fn build(self) -> GwResult<Graph> {
        validate::validate_structure(&self.graph)?;
        validate::validate_adjacency(&self.graph)?;
        Ok(self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::undirected();
        builder
            .node("X")
            .edge("A", "B")
            .weighted_edge("B", "C", 2.0);

        let graph = builder.build().unwrap();
        assert_eq!(graph.nodes(), ["X", "A", "B", "C"]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors("B"), ["A", "C"]);
    }

    #[test]
    fn builder_directed() {
        let mut builder = GraphBuilder::directed();
        builder.edge("A", "B");
        let graph = builder.build().unwrap();
        assert!(graph.is_directed());
        assert!(graph.neighbors("B").is_empty());
    }

    #[test]
    fn builder_rejects_infinite_weight() {
        let mut builder = GraphBuilder::undirected();
        builder.weighted_edge("A", "B", f64::INFINITY);
        assert!(builder.build().is_err());
    }
}
