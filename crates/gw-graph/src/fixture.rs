//! The reference graph used by the demos and tests.

use crate::graph::Graph;

/// Undirected edges of the reference graph, in insertion order.
pub const SAMPLE_EDGES: [(&str, &str); 6] = [
    ("A", "B"),
    ("A", "C"),
    ("B", "C"),
    ("B", "D"),
    ("C", "D"),
    ("C", "E"),
];

/// Five nodes A..E joined by the six unit-weight `SAMPLE_EDGES`.
pub fn sample_graph() -> Graph {
    let mut graph = Graph::new(false);
    for (u, v) in SAMPLE_EDGES {
        graph.add_edge(u, v);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_shape() {
        let g = sample_graph();
        assert_eq!(g.nodes(), ["A", "B", "C", "D", "E"]);
        assert_eq!(g.edge_count(), 6);
        assert!(!g.is_directed());
        assert_eq!(g.neighbors("C"), ["A", "B", "D", "E"]);
    }
}
