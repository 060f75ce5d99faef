//! Loading graphs from project files or the built-in sample.

use std::path::Path;
use std::time::Duration;

use gw_anim::DEFAULT_PERIOD;
use gw_graph::{Graph, GraphBuilder, sample_graph};
use gw_project::Project;
use tracing::{debug, info};

use crate::error::AppResult;

/// Playback settings taken from a project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub interval: Duration,
    pub start: Option<String>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_PERIOD,
            start: None,
        }
    }
}

/// A graph ready for queries, with the settings that came with it.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub name: String,
    pub graph: Graph,
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub name: String,
    pub directed: bool,
    pub node_count: usize,
    pub edge_count: usize,
}

impl LoadedGraph {
    /// The built-in five-node graph.
    pub fn sample() -> Self {
        Self {
            name: "sample".to_string(),
            graph: sample_graph(),
            playback: PlaybackSettings::default(),
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            name: self.name.clone(),
            directed: self.graph.is_directed(),
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
        }
    }
}

/// Load the graph at `path`, or the sample graph when no path is given.
pub fn load_graph(path: Option<&Path>) -> AppResult<LoadedGraph> {
    let Some(path) = path else {
        debug!("no graph file given, using the sample graph");
        return Ok(LoadedGraph::sample());
    };

    let project = gw_project::load(path)?;
    let graph = build_graph(&project)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    Ok(LoadedGraph {
        name: project.name,
        graph,
        playback: PlaybackSettings {
            interval: Duration::from_millis(project.playback.interval_ms),
            start: project.playback.start,
        },
    })
}

/// Build a validated graph from a project description.
pub fn build_graph(project: &Project) -> AppResult<Graph> {
    let mut builder = GraphBuilder::new(project.directed);
    for id in &project.nodes {
        builder.node(id);
    }
    for edge in &project.edges {
        builder.weighted_edge(&edge.from, &edge.to, edge.weight);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_gives_sample() {
        let loaded = load_graph(None).unwrap();
        let summary = loaded.summary();
        assert_eq!(summary.name, "sample");
        assert_eq!(summary.node_count, 5);
        assert_eq!(summary.edge_count, 6);
        assert!(!summary.directed);
        assert_eq!(loaded.playback.interval, Duration::from_millis(700));
    }

    #[test]
    fn build_graph_respects_declared_order() {
        let project: Project = serde_json::from_str(
            r#"{"version": 1, "nodes": ["C"], "edges": [{"from": "A", "to": "C", "weight": 3}]}"#,
        )
        .unwrap();
        let graph = build_graph(&project).unwrap();
        assert_eq!(graph.nodes(), ["C", "A"]);
        assert_eq!(graph.to_adjacency_matrix().weight("C", "A"), Some(3.0));
    }
}
