//! BFS step generation.

use std::collections::VecDeque;
use std::fmt;

use gw_graph::{Graph, NodeIdx};

/// One observable event of a BFS run.
///
/// Every variant except `End` carries the queue contents at the instant the
/// event happened, front first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Step {
    /// The start node entered the queue.
    Enqueue { node: String, queue: Vec<String> },
    /// The start node was marked visited.
    Visit { node: String, queue: Vec<String> },
    /// A node left the front of the queue.
    Dequeue { node: String, queue: Vec<String> },
    /// An edge of the dequeued node is being examined.
    Consider {
        from: String,
        to: String,
        queue: Vec<String>,
    },
    /// The examined neighbour was unvisited; it is now visited and queued.
    Discover {
        from: String,
        to: String,
        queue: Vec<String>,
    },
    /// The queue ran empty.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Enqueue,
    Visit,
    Dequeue,
    Consider,
    Discover,
    End,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Enqueue => "enqueue",
            StepKind::Visit => "visit",
            StepKind::Dequeue => "dequeue",
            StepKind::Consider => "consider",
            StepKind::Discover => "discover",
            StepKind::End => "end",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Enqueue { .. } => StepKind::Enqueue,
            Step::Visit { .. } => StepKind::Visit,
            Step::Dequeue { .. } => StepKind::Dequeue,
            Step::Consider { .. } => StepKind::Consider,
            Step::Discover { .. } => StepKind::Discover,
            Step::End => StepKind::End,
        }
    }

    /// Queue snapshot, front first. Empty for `End`.
    pub fn queue(&self) -> &[String] {
        match self {
            Step::Enqueue { queue, .. }
            | Step::Visit { queue, .. }
            | Step::Dequeue { queue, .. }
            | Step::Consider { queue, .. }
            | Step::Discover { queue, .. } => queue.as_slice(),
            Step::End => &[],
        }
    }

    /// Node the event acts on: the node itself, or the edge target.
    pub fn node(&self) -> Option<&str> {
        match self {
            Step::Enqueue { node, .. } | Step::Visit { node, .. } | Step::Dequeue { node, .. } => {
                Some(node.as_str())
            }
            Step::Consider { to, .. } | Step::Discover { to, .. } => Some(to.as_str()),
            Step::End => None,
        }
    }

    /// `(from, to)` for edge events.
    pub fn edge(&self) -> Option<(&str, &str)> {
        match self {
            Step::Consider { from, to, .. } | Step::Discover { from, to, .. } => {
                Some((from.as_str(), to.as_str()))
            }
            _ => None,
        }
    }
}

/// Replay BFS from `start` as a list of steps.
///
/// The start node produces `Enqueue` then `Visit`; nodes found later produce
/// only `Discover`. An unknown start yields `[End]`.
pub fn generate_bfs_steps(graph: &Graph, start: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    let Some(start_idx) = graph.idx(start) else {
        steps.push(Step::End);
        return steps;
    };

    let mut visited = vec![false; graph.node_count()];
    let mut queue: VecDeque<NodeIdx> = VecDeque::new();
    let label = |idx: NodeIdx| graph.id(idx).unwrap_or_default().to_owned();
    let snapshot = |queue: &VecDeque<NodeIdx>| -> Vec<String> {
        queue.iter().map(|&idx| label(idx)).collect()
    };

    queue.push_back(start_idx);
    steps.push(Step::Enqueue {
        node: label(start_idx),
        queue: snapshot(&queue),
    });
    visited[start_idx.index()] = true;
    steps.push(Step::Visit {
        node: label(start_idx),
        queue: snapshot(&queue),
    });

    while let Some(v) = queue.pop_front() {
        steps.push(Step::Dequeue {
            node: label(v),
            queue: snapshot(&queue),
        });
        for edge in graph.edges(v) {
            let w = edge.target;
            steps.push(Step::Consider {
                from: label(v),
                to: label(w),
                queue: snapshot(&queue),
            });
            if !visited[w.index()] {
                visited[w.index()] = true;
                queue.push_back(w);
                steps.push(Step::Discover {
                    from: label(v),
                    to: label(w),
                    queue: snapshot(&queue),
                });
            }
        }
    }

    steps.push(Step::End);
    steps
}

/// Nodes marked visited by a step list, in the order they were marked.
pub fn visited_order(steps: &[Step]) -> Vec<&str> {
    steps
        .iter()
        .filter_map(|step| match step {
            Step::Visit { node, .. } => Some(node.as_str()),
            Step::Discover { to, .. } => Some(to.as_str()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_graph::sample_graph;

    fn q(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_edge_trace() {
        let mut g = Graph::new(false);
        g.add_edge("A", "B");

        let steps = generate_bfs_steps(&g, "A");
        let expected = vec![
            Step::Enqueue {
                node: "A".into(),
                queue: q(&["A"]),
            },
            Step::Visit {
                node: "A".into(),
                queue: q(&["A"]),
            },
            Step::Dequeue {
                node: "A".into(),
                queue: q(&[]),
            },
            Step::Consider {
                from: "A".into(),
                to: "B".into(),
                queue: q(&[]),
            },
            Step::Discover {
                from: "A".into(),
                to: "B".into(),
                queue: q(&["B"]),
            },
            Step::Dequeue {
                node: "B".into(),
                queue: q(&[]),
            },
            Step::Consider {
                from: "B".into(),
                to: "A".into(),
                queue: q(&[]),
            },
            Step::End,
        ];
        assert_eq!(steps, expected);
    }

    #[test]
    fn unknown_start_is_just_end() {
        let steps = generate_bfs_steps(&sample_graph(), "Q");
        assert_eq!(steps, vec![Step::End]);
        assert!(visited_order(&steps).is_empty());
    }

    #[test]
    fn discovered_nodes_get_no_visit_event() {
        let steps = generate_bfs_steps(&sample_graph(), "A");
        let visits = steps.iter().filter(|s| s.kind() == StepKind::Visit).count();
        let enqueues = steps
            .iter()
            .filter(|s| s.kind() == StepKind::Enqueue)
            .count();
        assert_eq!(visits, 1);
        assert_eq!(enqueues, 1);
    }

    #[test]
    fn accessors() {
        let step = Step::Consider {
            from: "A".into(),
            to: "C".into(),
            queue: q(&["B"]),
        };
        assert_eq!(step.kind(), StepKind::Consider);
        assert_eq!(step.node(), Some("C"));
        assert_eq!(step.edge(), Some(("A", "C")));
        assert_eq!(step.queue(), ["B"]);
        assert_eq!(Step::End.queue().len(), 0);
        assert_eq!(Step::End.node(), None);
        assert_eq!(StepKind::Discover.to_string(), "discover");
    }
}
