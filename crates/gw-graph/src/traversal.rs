//! Breadth-first and depth-first traversal.
//!
//! Both walks run over slot indices with flat `Vec` state and translate to
//! string ids only when filling the result. A start id that is not in the
//! graph yields an empty result rather than an error.

use std::collections::{HashMap, VecDeque};

use gw_core::NodeIdx;

use crate::graph::Graph;

/// Outcome of a breadth-first traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BfsResult {
    /// Nodes in dequeue order.
    pub order: Vec<String>,
    /// Hop count from the start for every reached node.
    pub distance: HashMap<String, usize>,
    /// Node that first discovered each reached node (start excluded).
    pub parent: HashMap<String, String>,
}

/// Outcome of a depth-first traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsResult {
    /// Nodes in pre-order.
    pub order: Vec<String>,
    pub parent: HashMap<String, String>,
}

impl BfsResult {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl DfsResult {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Graph {
    /// Level-order traversal from `start`.
    ///
    /// Neighbours are examined in adjacency insertion order, so nodes at the
    /// same distance appear in the order their parents were dequeued.
    pub fn bfs(&self, start: &str) -> BfsResult {
        let Some(start) = self.idx(start) else {
            return BfsResult::default();
        };

        let n = self.node_count();
        let mut visited = vec![false; n];
        let mut dist: Vec<Option<usize>> = vec![None; n];
        let mut parent: Vec<Option<NodeIdx>> = vec![None; n];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited[start.index()] = true;
        dist[start.index()] = Some(0);
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let next = dist[v.index()].map_or(0, |d| d + 1);
            for edge in self.edges(v) {
                let w = edge.target;
                if !visited[w.index()] {
                    visited[w.index()] = true;
                    parent[w.index()] = Some(v);
                    dist[w.index()] = Some(next);
                    queue.push_back(w);
                }
            }
        }

        BfsResult {
            distance: order
                .iter()
                .filter_map(|&v| dist[v.index()].map(|d| (self.label(v).to_owned(), d)))
                .collect(),
            parent: self.parent_map(&order, &parent),
            order: self.labels(&order),
        }
    }

    /// Pre-order depth-first traversal from `start`.
    ///
    /// Uses an explicit stack of `(node, next neighbour position)` frames,
    /// which visits nodes in exactly the order of the recursive formulation.
    pub fn dfs(&self, start: &str) -> DfsResult {
        let Some(start) = self.idx(start) else {
            return DfsResult::default();
        };

        let mut visited = vec![false; self.node_count()];
        let mut parent: Vec<Option<NodeIdx>> = vec![None; self.node_count()];
        let mut order = vec![start];
        let mut stack: Vec<(NodeIdx, usize)> = vec![(start, 0)];
        visited[start.index()] = true;

        while let Some(frame) = stack.last_mut() {
            let (v, cursor) = *frame;
            match self.edges(v).get(cursor) {
                Some(edge) => {
                    frame.1 += 1;
                    let w = edge.target;
                    if !visited[w.index()] {
                        visited[w.index()] = true;
                        parent[w.index()] = Some(v);
                        order.push(w);
                        stack.push((w, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        DfsResult {
            parent: self.parent_map(&order, &parent),
            order: self.labels(&order),
        }
    }

    fn labels(&self, order: &[NodeIdx]) -> Vec<String> {
        order.iter().map(|&v| self.label(v).to_owned()).collect()
    }

    fn parent_map(
        &self,
        order: &[NodeIdx],
        parent: &[Option<NodeIdx>],
    ) -> HashMap<String, String> {
        order
            .iter()
            .filter_map(|&v| {
                parent[v.index()].map(|p| (self.label(v).to_owned(), self.label(p).to_owned()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph {
        let mut g = Graph::new(true);
        g.add_edge("1", "2");
        g.add_edge("2", "3");
        g.add_edge("3", "4");
        g
    }

    #[test]
    fn bfs_on_directed_chain() {
        let result = chain().bfs("1");
        assert_eq!(result.order, ["1", "2", "3", "4"]);
        assert_eq!(result.distance["4"], 3);
        assert_eq!(result.parent["3"], "2");
        assert!(!result.parent.contains_key("1"));
    }

    #[test]
    fn bfs_respects_direction() {
        let result = chain().bfs("3");
        assert_eq!(result.order, ["3", "4"]);
        assert!(!result.distance.contains_key("1"));
    }

    #[test]
    fn bfs_unknown_start_is_empty() {
        let result = chain().bfs("nope");
        assert!(result.is_empty());
        assert!(result.distance.is_empty());
        assert!(result.parent.is_empty());
    }

    #[test]
    fn dfs_unknown_start_is_empty() {
        let result = chain().dfs("nope");
        assert!(result.is_empty());
        assert!(result.parent.is_empty());
    }

    #[test]
    fn dfs_goes_deep_before_wide() {
        // 1 -> 2 -> 4, 1 -> 3
        let mut g = Graph::new(true);
        g.add_edge("1", "2");
        g.add_edge("1", "3");
        g.add_edge("2", "4");

        let dfs = g.dfs("1");
        assert_eq!(dfs.order, ["1", "2", "4", "3"]);
        assert_eq!(dfs.parent["4"], "2");

        let bfs = g.bfs("1");
        assert_eq!(bfs.order, ["1", "2", "3", "4"]);
    }

    #[test]
    fn isolated_start_visits_only_itself() {
        let mut g = Graph::new(false);
        g.add_node("solo");
        g.add_edge("A", "B");
        assert_eq!(g.bfs("solo").order, ["solo"]);
        assert_eq!(g.bfs("solo").distance["solo"], 0);
        assert_eq!(g.dfs("solo").order, ["solo"]);
    }

    #[test]
    fn self_loop_does_not_revisit() {
        let mut g = Graph::new(false);
        g.add_edge("A", "A");
        g.add_edge("A", "B");
        assert_eq!(g.bfs("A").order, ["A", "B"]);
        assert_eq!(g.dfs("A").order, ["A", "B"]);
    }
}
