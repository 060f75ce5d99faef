//! gw-core: shared foundation for graphwalk.
//!
//! Contains:
//! - ids (compact slot index for graph nodes)
//! - numeric (edge weights + float helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{GwError, GwResult};
pub use ids::NodeIdx;
pub use numeric::*;
