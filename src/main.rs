use clap::Parser;
use scenecap::{RenderRunner, RunnerConfig, Viewport};
use std::path::PathBuf;

/// Render a local HTML/WebGL scene to a PNG file.
///
/// The scene is expected to signal that its drawing is finished by
/// setting a page-global flag (window.renderDone = true by default);
/// the screenshot is captured once that condition is observed.
#[derive(Parser)]
#[command(name = "scenecap", version)]
struct Cli {
    /// Scene HTML file to render
    #[arg(default_value = "scene.html")]
    scene: PathBuf,

    /// Output PNG path (overwritten if it exists)
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// JavaScript expression that signals render completion
    #[arg(long, default_value = "window.renderDone === true")]
    condition: String,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Deadline for the completion condition, in milliseconds
    #[arg(long, default_value_t = 30000)]
    timeout_ms: u64,

    /// Interval between condition polls, in milliseconds
    #[arg(long, default_value_t = 100)]
    poll_ms: u64,

    /// Show the browser window instead of running headless
    #[arg(long)]
    visible: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = RunnerConfig {
        viewport: Viewport {
            width: cli.width,
            height: cli.height,
        },
        wait_condition: cli.condition,
        timeout_ms: cli.timeout_ms,
        poll_interval_ms: cli.poll_ms,
        headless: !cli.visible,
    };

    let runner = RenderRunner::new(&cli.scene, &cli.output, config);
    if let Err(e) = runner.run() {
        eprintln!("scenecap: {}", e);
        std::process::exit(1);
    }
}
