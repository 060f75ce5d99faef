//! Shared application service layer for graphwalk.
//!
//! Frontends go through this crate to load graphs, run traversals, format
//! reports and drive BFS playback, so the CLI holds no graph logic itself.

pub mod error;
pub mod playback_service;
pub mod project_service;
pub mod query;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use playback_service::{play, play_with, prepare_player, resolve_start, steps_as_json};
pub use project_service::{GraphSummary, LoadedGraph, PlaybackSettings, build_graph, load_graph};
pub use query::{
    adjacency_list_json, adjacency_matrix_text, bfs_report, dfs_report, run_bfs, run_dfs,
};
