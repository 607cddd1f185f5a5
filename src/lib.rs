//! Scenecap
//!
//! Renders a local, self-contained HTML/WebGL scene to a PNG file by
//! driving a controlled Chrome instance over the Chrome DevTools Protocol.
//!
//! The pipeline is deliberately linear: read the scene file, launch a
//! browser, inject the HTML as the document content, wait until the page
//! signals that its rendering work is done, capture a screenshot, and
//! write it to disk. The completion signal is a contract with the scene
//! itself: the page script is expected to set a global flag (by default
//! `window.renderDone = true`) once its draw calls have finished.
//!
//! # Example
//!
//! ```no_run
//! use scenecap::{RenderRunner, RunnerConfig};
//!
//! # fn main() -> scenecap::Result<()> {
//! let config = RunnerConfig {
//!     timeout_ms: 10_000,
//!     ..Default::default()
//! };
//!
//! let runner = RenderRunner::new("scene.html", "output.png", config);
//! runner.run()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod cdp;

pub mod runner;
pub use runner::RenderRunner;

/// Configuration for a render run
///
/// The defaults mirror the contract the tool was built around: a
/// 1280x720 viewport, a page-global `renderDone` completion flag, and a
/// 30 second deadline for the scene to finish drawing.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Viewport dimensions the browser window is sized to
    pub viewport: Viewport,
    /// JavaScript expression polled in the page context; the run proceeds
    /// to capture once it evaluates to `true`
    pub wait_condition: String,
    /// Deadline for the wait condition in milliseconds
    pub timeout_ms: u64,
    /// Interval between condition polls in milliseconds
    pub poll_interval_ms: u64,
    /// Whether to launch Chrome headless. Disabling this shows the
    /// browser window, which is occasionally useful when debugging a
    /// scene that never sets its completion flag.
    pub headless: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            wait_condition: "window.renderDone === true".to_string(),
            timeout_ms: 30000,
            poll_interval_ms: 100,
            headless: true,
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}
