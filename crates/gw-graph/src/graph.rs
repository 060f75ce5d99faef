//! Core graph data structure.

use std::collections::HashMap;

use gw_core::{DEFAULT_WEIGHT, NodeIdx, Weight};

/// One adjacency record: the neighbour reached and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeIdx,
    pub weight: Weight,
}

/// Adjacency-list graph keyed by string node ids.
///
/// Nodes get a dense slot in insertion order; `ids[slot]` is the public id
/// and `adjacency[slot]` holds the outgoing records in insertion order.
/// Every edge target is a slot of this graph, since adding an edge inserts
/// both endpoints first.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    pub(crate) ids: Vec<String>,
    pub(crate) lookup: HashMap<String, NodeIdx>,
    pub(crate) adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph. Directedness cannot change afterwards.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert a node if it is not present yet and return its slot.
    pub fn add_node(&mut self, id: &str) -> NodeIdx {
        if let Some(&idx) = self.lookup.get(id) {
            return idx;
        }
        let idx = NodeIdx::from_index(self.ids.len());
        self.ids.push(id.to_owned());
        self.lookup.insert(id.to_owned(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add an edge of weight 1.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Add an edge, inserting missing endpoints.
    ///
    /// Undirected graphs store the record in both directions. Repeated calls
    /// create parallel edges.
    pub fn add_weighted_edge(&mut self, u: &str, v: &str, weight: Weight) {
        let from = self.add_node(u);
        let to = self.add_node(v);
        self.adjacency[from.index()].push(Edge { target: to, weight });
        if !self.directed {
            self.adjacency[to.index()].push(Edge {
                target: from,
                weight,
            });
        }
        self.edge_count += 1;
    }

    /// Neighbour ids of `id` in insertion order; empty for unknown ids.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.idx(id)
            .map(|idx| {
                self.edges(idx)
                    .iter()
                    .map(|e| self.label(e.target))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All node ids in insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// Slot of a node id, if present.
    pub fn idx(&self, id: &str) -> Option<NodeIdx> {
        self.lookup.get(id).copied()
    }

    /// Node id stored in a slot, if the slot exists.
    pub fn id(&self, idx: NodeIdx) -> Option<&str> {
        self.ids.get(idx.index()).map(String::as_str)
    }

    /// Outgoing adjacency records of a slot (empty if out of bounds).
    pub fn edges(&self, idx: NodeIdx) -> &[Edge] {
        self.adjacency
            .get(idx.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of `add_edge` calls, not adjacency records.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn label(&self, idx: NodeIdx) -> &str {
        &self.ids[idx.index()]
    }
}
