//! Error types for the scene capture pipeline

use thiserror::Error;

/// Result type alias for capture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a scene, one variant per
/// failure origin in the pipeline. All of them are fatal to the run.
#[derive(Error, Debug)]
pub enum Error {
    /// The scene HTML file could not be read. Raised before any browser
    /// process is launched.
    #[error("Failed to read scene file '{path}': {reason}")]
    SceneRead { path: String, reason: String },

    /// The Chrome process could not be launched or the tab could not be
    /// created.
    #[error("Browser launch failed: {0}")]
    Launch(String),

    /// Navigation to the injected scene content failed.
    #[error("Failed to load scene content: {0}")]
    Load(String),

    /// The completion condition never became true within the deadline.
    #[error("Render condition '{condition}' not true after {timeout_ms}ms")]
    WaitTimeout { condition: String, timeout_ms: u64 },

    /// The screenshot could not be captured.
    #[error("Screenshot capture failed: {0}")]
    Capture(String),

    /// The PNG bytes could not be written to the output path.
    #[error("Failed to write output file '{path}': {reason}")]
    OutputWrite { path: String, reason: String },
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Launch(err.to_string())
    }
}
