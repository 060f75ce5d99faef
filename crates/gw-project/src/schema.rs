//! Project schema definitions.

use serde::{Deserialize, Serialize};

use gw_core::{DEFAULT_WEIGHT, Weight};

/// Newest schema version this crate understands.
pub const LATEST_VERSION: u32 = 1;

/// Default delay between playback steps.
pub const DEFAULT_INTERVAL_MS: u64 = 700;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub directed: bool,
    /// Declared nodes; fixes their order ahead of edge endpoints.
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default)]
    pub playback: PlaybackDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackDef {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl Default for PlaybackDef {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            start: None,
        }
    }
}

impl Project {
    /// Node ids in the order a graph built from this project holds them:
    /// declared nodes first, then edge endpoints as they appear.
    pub fn node_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        let declared = self.nodes.iter().map(String::as_str);
        let endpoints = self
            .edges
            .iter()
            .flat_map(|e| [e.from.as_str(), e.to.as_str()]);
        for id in declared.chain(endpoints) {
            if !order.contains(&id) {
                order.push(id);
            }
        }
        order
    }
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}
