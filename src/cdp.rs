//! Chrome DevTools Protocol session management
//!
//! Wraps the `headless_chrome` crate with the small surface the render
//! pipeline needs: launch a browser sized to the viewport, inject scene
//! HTML as the document content, poll a page-side condition, and capture
//! a PNG of the rendered result.

use crate::{Error, Result, RunnerConfig};
use base64::Engine as Base64Engine;
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Build a `data:` URL carrying the full scene HTML.
///
/// Navigating to this URL makes the string the entire document content,
/// so the browser's normal "load" lifecycle applies to the injected
/// scene exactly as it would to a fetched page.
pub fn data_url(html: &str) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(html);
    format!("data:text/html;base64,{}", b64)
}

/// A browser session owning one Chrome process and one tab.
///
/// The session is scoped: dropping it (on any early return included)
/// terminates the child Chrome process, so a failed run never leaks a
/// browser.
pub struct BrowserSession {
    browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a Chrome process sized to the configured viewport and open
    /// a fresh tab in it.
    pub fn launch(config: &RunnerConfig) -> Result<Self> {
        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.viewport.width, config.viewport.height)))
            .build()
            .map_err(|e| Error::Launch(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::Launch(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::Launch(format!("Failed to create tab: {}", e)))?;

        debug!("browser launched ({}x{}, headless={})",
            config.viewport.width, config.viewport.height, config.headless);

        Ok(Self { browser, tab })
    }

    /// Load an HTML string as the tab's full document content and block
    /// until the browser reports the load lifecycle event.
    pub fn load_html(&self, html: &str) -> Result<()> {
        let url = data_url(html);

        self.tab
            .navigate_to(&url)
            .map_err(|e| Error::Load(format!("Navigation failed: {}", e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::Load(format!("Wait for load failed: {}", e)))?;

        debug!("scene content loaded ({} bytes of HTML)", html.len());
        Ok(())
    }

    /// Poll a JavaScript expression in the page context until it
    /// evaluates to `true` or the deadline passes.
    ///
    /// Evaluation errors while polling are not fatal: a scene script may
    /// still be setting up its globals right after load. They are logged
    /// and the poll continues until the deadline.
    pub fn wait_for_condition(
        &self,
        condition: &str,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.tab.evaluate(condition, false) {
                Ok(result) => {
                    if result.value == Some(serde_json::Value::Bool(true)) {
                        debug!("condition '{}' observed true", condition);
                        return Ok(());
                    }
                }
                Err(e) => warn!("condition poll failed, retrying: {}", e),
            }

            if Instant::now() >= deadline {
                return Err(Error::WaitTimeout {
                    condition: condition.to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            std::thread::sleep(poll_interval);
        }
    }

    /// Capture a full-surface PNG screenshot of the tab.
    pub fn capture_png(&self) -> Result<Vec<u8>> {
        let screenshot_data = self
            .tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| Error::Capture(format!("Screenshot failed: {}", e)))?;

        Ok(screenshot_data)
    }

    /// Close the session and terminate the Chrome process.
    ///
    /// Dropping the session has the same effect; this exists so the
    /// successful path can release the browser explicitly rather than
    /// relying on scope exit.
    pub fn close(self) -> Result<()> {
        drop(self.tab);
        drop(self.browser);
        Ok(())
    }
}
