//! Mapping from steps to abstract highlight roles.
//!
//! Renderers pick their own colours per [`Role`]; nothing here knows about
//! presentation identifiers.

use crate::step::Step;

/// Visual role of a node or edge after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Role {
    Enqueued,
    Visited,
    Dequeued,
    Considered,
    /// Edge along which a node was discovered.
    TreeEdge,
    Discovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    Node { id: &'a str, role: Role },
    Edge {
        from: &'a str,
        to: &'a str,
        role: Role,
    },
}

impl Step {
    /// Highlights a renderer applies for this step, in application order.
    pub fn highlights(&self) -> Vec<Highlight<'_>> {
        match self {
            Step::Enqueue { node, .. } => vec![Highlight::Node {
                id: node,
                role: Role::Enqueued,
            }],
            Step::Visit { node, .. } => vec![Highlight::Node {
                id: node,
                role: Role::Visited,
            }],
            Step::Dequeue { node, .. } => vec![Highlight::Node {
                id: node,
                role: Role::Dequeued,
            }],
            Step::Consider { from, to, .. } => vec![Highlight::Edge {
                from,
                to,
                role: Role::Considered,
            }],
            Step::Discover { from, to, .. } => vec![
                Highlight::Edge {
                    from,
                    to,
                    role: Role::TreeEdge,
                },
                Highlight::Node {
                    id: to,
                    role: Role::Discovered,
                },
            ],
            Step::End => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_marks_edge_then_node() {
        let step = Step::Discover {
            from: "A".into(),
            to: "B".into(),
            queue: vec!["B".into()],
        };
        assert_eq!(
            step.highlights(),
            vec![
                Highlight::Edge {
                    from: "A",
                    to: "B",
                    role: Role::TreeEdge
                },
                Highlight::Node {
                    id: "B",
                    role: Role::Discovered
                },
            ]
        );
    }

    #[test]
    fn end_marks_nothing() {
        assert!(Step::End.highlights().is_empty());
    }
}
