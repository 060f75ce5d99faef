//! Adjacency-list and adjacency-matrix projections.

use std::fmt;

use gw_core::{NO_EDGE, Weight};

use crate::graph::Graph;

/// Neighbour ids per node, weights dropped, in node insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    entries: Vec<(String, Vec<String>)>,
}

impl AdjacencyList {
    /// Neighbour ids of `id`, or `None` for unknown ids.
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(node, _)| node == id)
            .map(|(_, neighbors)| neighbors.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(node, neighbors)| (node.as_str(), neighbors.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a map that keeps node insertion order.
#[cfg(feature = "serde")]
impl serde::Serialize for AdjacencyList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (node, neighbors) in &self.entries {
            map.serialize_entry(node, neighbors)?;
        }
        map.end()
    }
}

/// Dense weight matrix; row/column `i` is `nodes[i]`.
///
/// A missing edge is `0`. With parallel edges only the weight inserted last
/// survives.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdjacencyMatrix {
    pub nodes: Vec<String>,
    pub cells: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Weight of the edge `from -> to`; `None` for unknown ids.
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        let i = self.nodes.iter().position(|n| n == from)?;
        let j = self.nodes.iter().position(|n| n == to)?;
        Some(self.cells[i][j])
    }

    /// Number of cells holding an edge.
    pub fn nonzero_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&w| w != NO_EDGE)
            .count()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (0..i).all(|j| self.cells[i][j] == self.cells[j][i]))
    }
}

/// Header row of ids, then one space-separated row per node.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" "))?;
        for row in &self.cells {
            let cells: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            write!(f, "\n{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl Graph {
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let entries = self
            .ids
            .iter()
            .zip(&self.adjacency)
            .map(|(id, row)| {
                let neighbors = row
                    .iter()
                    .map(|e| self.label(e.target).to_owned())
                    .collect();
                (id.clone(), neighbors)
            })
            .collect();
        AdjacencyList { entries }
    }

    pub fn to_adjacency_matrix(&self) -> AdjacencyMatrix {
        let n = self.node_count();
        let mut cells = vec![vec![NO_EDGE; n]; n];
        for (i, row) in self.adjacency.iter().enumerate() {
            for edge in row {
                cells[i][edge.target.index()] = edge.weight;
            }
        }
        AdjacencyMatrix {
            nodes: self.ids.clone(),
            cells,
        }
    }
}
