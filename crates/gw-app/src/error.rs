//! Error types for the gw-app service layer.

/// Application error type that wraps errors from the backend crates
/// and gives frontends one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Unknown start node: {0}")]
    UnknownStart(String),

    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for gw-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<gw_project::ProjectError> for AppError {
    fn from(err: gw_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<gw_core::GwError> for AppError {
    fn from(err: gw_core::GwError) -> Self {
        AppError::Graph(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
