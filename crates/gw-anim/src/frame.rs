//! Accumulated render state of a partially replayed step list.

use std::collections::HashMap;

use crate::highlight::{Highlight, Role};
use crate::render::Renderer;
use crate::step::Step;

/// What a renderer would show after applying a prefix of the steps.
///
/// Later highlights overwrite earlier ones. Edges are keyed without
/// direction, so `A-B` and `B-A` share one role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    nodes: HashMap<String, Role>,
    edges: HashMap<(String, String), Role>,
    queue: Vec<String>,
    applied: usize,
    finished: bool,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame after applying `steps[..count]`.
    pub fn replay(steps: &[Step], count: usize) -> Self {
        let mut frame = Self::new();
        for step in steps.iter().take(count) {
            frame.apply(step);
        }
        frame
    }

    pub fn apply(&mut self, step: &Step) {
        for highlight in step.highlights() {
            match highlight {
                Highlight::Node { id, role } => {
                    self.nodes.insert(id.to_owned(), role);
                }
                Highlight::Edge { from, to, role } => {
                    self.edges.insert(edge_key(from, to), role);
                }
            }
        }
        match step {
            Step::End => self.finished = true,
            _ => self.queue = step.queue().to_vec(),
        }
        self.applied += 1;
    }

    pub fn node_role(&self, id: &str) -> Option<Role> {
        self.nodes.get(id).copied()
    }

    pub fn edge_role(&self, from: &str, to: &str) -> Option<Role> {
        self.edges.get(&edge_key(from, to)).copied()
    }

    pub fn queue(&self) -> &[String] {
        &self.queue
    }

    /// Number of steps applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Renderer for Frame {
    fn on_step(&mut self, step: &Step) {
        self.apply(step);
    }

    fn on_reset(&mut self) {
        self.clear();
    }
}

fn edge_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_owned(), b.to_owned())
    } else {
        (b.to_owned(), a.to_owned())
    }
}
