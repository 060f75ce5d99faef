//! Traversal queries and text reports.

use std::collections::HashMap;
use std::fmt::Write as _;

use gw_graph::{BfsResult, DfsResult, Graph};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// BFS from `start`, treating an unknown start as a caller mistake.
///
/// The graph itself answers an unknown start with an empty result; frontends
/// that take the start from user input want to report it instead.
pub fn run_bfs(graph: &Graph, start: &str) -> AppResult<BfsResult> {
    ensure_start(graph, start)?;
    let result = graph.bfs(start);
    debug!(start, reached = result.order.len(), "bfs finished");
    Ok(result)
}

/// DFS from `start`; see [`run_bfs`] for the unknown-start rule.
pub fn run_dfs(graph: &Graph, start: &str) -> AppResult<DfsResult> {
    ensure_start(graph, start)?;
    let result = graph.dfs(start);
    debug!(start, reached = result.order.len(), "dfs finished");
    Ok(result)
}

pub(crate) fn ensure_start(graph: &Graph, start: &str) -> AppResult<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(AppError::UnknownStart(start.to_string()))
    }
}

/// Text report of a BFS run: order, distances, then parents.
pub fn bfs_report(start: &str, result: &BfsResult) -> String {
    report(
        &format!("BFS from {}", start),
        &result.order,
        Some(&result.distance),
        &result.parent,
    )
}

/// Text report of a DFS run: order, then parents.
pub fn dfs_report(start: &str, result: &DfsResult) -> String {
    report(
        &format!("DFS from {}", start),
        &result.order,
        None,
        &result.parent,
    )
}

// Distances and parents are listed in visit order.
fn report(
    title: &str,
    order: &[String],
    distance: Option<&HashMap<String, usize>>,
    parent: &HashMap<String, String>,
) -> String {
    let mut s = format!("{}\n\n", title);
    let _ = writeln!(s, "Order: {}\n", order.join(" -> "));

    if let Some(distance) = distance {
        s.push_str("Distances:\n");
        for node in order {
            if let Some(d) = distance.get(node) {
                let _ = writeln!(s, "  {}: {}", node, d);
            }
        }
        s.push('\n');
    }

    s.push_str("Parents:\n");
    for node in order {
        if let Some(p) = parent.get(node) {
            let _ = writeln!(s, "  {}: {}", node, p);
        }
    }
    s.push('\n');
    s
}

/// Adjacency list as pretty JSON, nodes in insertion order.
pub fn adjacency_list_json(graph: &Graph) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&graph.to_adjacency_list())?)
}

/// Adjacency matrix as a header row of ids followed by weight rows.
pub fn adjacency_matrix_text(graph: &Graph) -> String {
    graph.to_adjacency_matrix().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_graph::sample_graph;

    #[test]
    fn bfs_report_lists_in_visit_order() {
        let g = sample_graph();
        let report = bfs_report("A", &run_bfs(&g, "A").unwrap());
        let expected = "BFS from A\n\n\
            Order: A -> B -> C -> D -> E\n\n\
            Distances:\n  A: 0\n  B: 1\n  C: 1\n  D: 2\n  E: 2\n\n\
            Parents:\n  B: A\n  C: A\n  D: B\n  E: C\n\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn dfs_report_has_no_distances() {
        let g = sample_graph();
        let report = dfs_report("A", &run_dfs(&g, "A").unwrap());
        assert!(report.starts_with("DFS from A\n\nOrder: A -> B -> C -> D -> E\n"));
        assert!(!report.contains("Distances"));
        assert!(report.contains("  D: C\n"));
    }

    #[test]
    fn unknown_start_is_an_app_error() {
        let g = sample_graph();
        assert!(matches!(run_bfs(&g, "Z"), Err(AppError::UnknownStart(s)) if s == "Z"));
        assert!(matches!(run_dfs(&g, "Z"), Err(AppError::UnknownStart(_))));
    }

    #[test]
    fn adjacency_outputs() {
        let g = sample_graph();
        let json = adjacency_list_json(&g).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["C"], serde_json::json!(["A", "B", "D", "E"]));
        assert!(json.find("\"A\"").unwrap() < json.find("\"E\"").unwrap());

        let matrix = adjacency_matrix_text(&g);
        let mut lines = matrix.lines();
        assert_eq!(lines.next(), Some("A B C D E"));
        assert_eq!(lines.next(), Some("0 1 1 0 0"));
    }
}
