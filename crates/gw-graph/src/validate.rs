//! Graph validation logic.

use std::collections::HashMap;

use gw_core::{GwResult, ensure_finite};

use crate::error::GraphError;
use crate::graph::Graph;

/// Check that lookup, slots and adjacency agree with each other.
pub(crate) fn validate_structure(graph: &Graph) -> GwResult<()> {
    if graph.adjacency.len() != graph.ids.len() {
        return Err(GraphError::AdjacencyLength {
            nodes: graph.ids.len(),
            rows: graph.adjacency.len(),
        }
        .into());
    }

    for (slot, id) in graph.ids.iter().enumerate() {
        match graph.lookup.get(id) {
            Some(idx) if idx.index() == slot => {}
            _ => return Err(GraphError::LookupMismatch { id: id.clone() }.into()),
        }
    }
    if graph.lookup.len() != graph.ids.len() {
        // a stale lookup entry without a slot
        let stray = graph
            .lookup
            .keys()
            .find(|k| !graph.ids.contains(k))
            .cloned()
            .unwrap_or_default();
        return Err(GraphError::LookupMismatch { id: stray }.into());
    }

    Ok(())
}

/// Check edge targets, weights and, for undirected graphs, mirror records.
pub(crate) fn validate_adjacency(graph: &Graph) -> GwResult<()> {
    let n = graph.ids.len();
    // (from, to) -> records seen
    let mut pair_counts: HashMap<(usize, usize), usize> = HashMap::new();

    for (from, row) in graph.adjacency.iter().enumerate() {
        for edge in row {
            let to = edge.target.index();
            if to >= n {
                return Err(GraphError::DanglingTarget {
                    from: graph.ids[from].clone(),
                    slot: to,
                }
                .into());
            }
            if ensure_finite(edge.weight, "edge weight").is_err() {
                return Err(GraphError::NonFiniteWeight {
                    from: graph.ids[from].clone(),
                    to: graph.ids[to].clone(),
                }
                .into());
            }
            *pair_counts.entry((from, to)).or_default() += 1;
        }
    }

    if !graph.is_directed() {
        for (&(from, to), &count) in &pair_counts {
            let mirrored = pair_counts.get(&(to, from)).copied().unwrap_or(0);
            if mirrored != count {
                return Err(GraphError::Asymmetric {
                    from: graph.ids[from].clone(),
                    to: graph.ids[to].clone(),
                }
                .into());
            }
        }
    }

    Ok(())
}
