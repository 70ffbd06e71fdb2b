//! Error type shared by the layout pipeline and the command-line front end.

/// Errors produced while laying out a diagram.
///
/// Dangling edges, self references, empty input and coincident nodes are
/// handled inside the pipeline and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A node box has a non-finite or non-positive size
    #[error("Invalid dimensions for node '{id}': {width}x{height}")]
    InvalidDimensions { id: String, width: f64, height: f64 },

    /// Two input nodes share the same identifier
    #[error("Duplicate node id '{0}'")]
    DuplicateNode(String),

    /// A tuning constant is out of its valid range
    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
