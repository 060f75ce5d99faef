//! gw-anim: step-by-step BFS playback for graphwalk.
//!
//! The traversal is replayed as a finite list of [`Step`] events, each with a
//! snapshot of the queue, so a consumer can render any prefix of the list
//! without re-running the search. Playback state lives in a [`StepPlayer`]
//! owned by the frontend; drawing is delegated to a [`Renderer`].

pub mod frame;
pub mod highlight;
pub mod player;
pub mod render;
pub mod step;

pub use frame::Frame;
pub use highlight::{Highlight, Role};
pub use player::{DEFAULT_PERIOD, Pacer, StepPlayer, ThreadPacer};
pub use render::Renderer;
pub use step::{Step, StepKind, generate_bfs_steps, visited_order};
