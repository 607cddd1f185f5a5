//! The render pipeline

use crate::cdp::BrowserSession;
use crate::{Error, Result, RunnerConfig};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Executes the fixed render pipeline exactly once: read the scene file,
/// launch a browser, load the scene, wait for its completion flag,
/// capture a screenshot, write it out.
pub struct RenderRunner {
    scene_path: PathBuf,
    output_path: PathBuf,
    config: RunnerConfig,
}

impl RenderRunner {
    pub fn new(
        scene_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
        config: RunnerConfig,
    ) -> Self {
        Self {
            scene_path: scene_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            config,
        }
    }

    /// Run the pipeline.
    ///
    /// Any step failing aborts the run with the corresponding error. The
    /// scene file is read before the browser is launched, so a missing
    /// scene never spawns a Chrome process; once launched, the browser is
    /// terminated on every exit path because the session drops with this
    /// stack frame.
    pub fn run(&self) -> Result<()> {
        let html = std::fs::read_to_string(&self.scene_path).map_err(|e| Error::SceneRead {
            path: self.scene_path.display().to_string(),
            reason: e.to_string(),
        })?;

        let session = BrowserSession::launch(&self.config)?;

        session.load_html(&html)?;

        info!("waiting for '{}'", self.config.wait_condition);
        session.wait_for_condition(
            &self.config.wait_condition,
            Duration::from_millis(self.config.timeout_ms),
            Duration::from_millis(self.config.poll_interval_ms),
        )?;

        let png = session.capture_png()?;

        // Plain overwrite; re-runs replace the file rather than version it.
        std::fs::write(&self.output_path, &png).map_err(|e| Error::OutputWrite {
            path: self.output_path.display().to_string(),
            reason: e.to_string(),
        })?;

        session.close()?;

        println!("Rendered {}", self.output_path.display());
        Ok(())
    }
}
