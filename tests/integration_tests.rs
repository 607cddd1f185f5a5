//! Integration tests for the render pipeline
//!
//! The Chrome-dependent tests are `#[ignore]`d so the suite stays green
//! on machines without a browser; run them with `cargo test -- --ignored`.

use scenecap::{Error, RenderRunner, RunnerConfig, Viewport};
use std::path::PathBuf;

/// A scene that flags completion synchronously on load.
const INSTANT_SCENE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Instant Scene</title></head>
<body style="background: #204060">
<script>window.renderDone = true;</script>
</body>
</html>"#;

/// A scene that never sets the completion flag.
const STUCK_SCENE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Stuck Scene</title></head>
<body><p>still drawing...</p></body>
</html>"#;

/// Create a scratch directory unique to one test.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scenecap-test-{}-{}", test, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_scene(dir: &PathBuf, html: &str) -> PathBuf {
    let path = dir.join("scene.html");
    std::fs::write(&path, html).unwrap();
    path
}

/// Read the image dimensions out of a PNG's IHDR chunk.
fn png_dimensions(data: &[u8]) -> (u32, u32) {
    assert_eq!(&data[0..8], b"\x89PNG\r\n\x1a\n", "not a PNG file");
    // IHDR is always the first chunk: width and height are the first two
    // big-endian u32s of its payload, at offsets 16 and 20.
    let width = u32::from_be_bytes(data[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(data[20..24].try_into().unwrap());
    (width, height)
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_render_scene_produces_png() {
    let dir = scratch_dir("render");
    let scene = write_scene(&dir, INSTANT_SCENE);
    let output = dir.join("output.png");

    let runner = RenderRunner::new(&scene, &output, RunnerConfig::default());
    runner.run().expect("render run failed");

    let data = std::fs::read(&output).expect("output.png was not written");
    assert!(data.len() > 100, "PNG data seems too small");
    assert_eq!(&data[0..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_screenshot_matches_viewport() {
    let dir = scratch_dir("viewport");
    let scene = write_scene(&dir, INSTANT_SCENE);
    let output = dir.join("output.png");

    let config = RunnerConfig {
        viewport: Viewport {
            width: 800,
            height: 600,
        },
        ..Default::default()
    };

    let runner = RenderRunner::new(&scene, &output, config);
    runner.run().expect("render run failed");

    let data = std::fs::read(&output).unwrap();
    assert_eq!(png_dimensions(&data), (800, 600));
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_stuck_scene_times_out_without_output() {
    let dir = scratch_dir("timeout");
    let scene = write_scene(&dir, STUCK_SCENE);
    let output = dir.join("output.png");

    let config = RunnerConfig {
        timeout_ms: 2000,
        ..Default::default()
    };

    let runner = RenderRunner::new(&scene, &output, config);
    match runner.run() {
        Err(Error::WaitTimeout { timeout_ms, .. }) => assert_eq!(timeout_ms, 2000),
        other => panic!("expected WaitTimeout, got {:?}", other.err()),
    }

    assert!(!output.exists(), "no output should be written on timeout");
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_rerun_overwrites_output() {
    let dir = scratch_dir("overwrite");
    let scene = write_scene(&dir, INSTANT_SCENE);
    let output = dir.join("output.png");

    // Seed the output path with junk; the run must replace it wholesale.
    std::fs::write(&output, b"not a png").unwrap();

    let runner = RenderRunner::new(&scene, &output, RunnerConfig::default());
    runner.run().expect("first run failed");
    let first = std::fs::read(&output).unwrap();
    assert_eq!(&first[0..8], b"\x89PNG\r\n\x1a\n");

    runner.run().expect("second run failed");
    let second = std::fs::read(&output).unwrap();
    assert_eq!(&second[0..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
#[ignore] // Requires Chrome to be installed
#[cfg(unix)]
fn test_readonly_output_reports_write_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_dir("readonly");
    let scene = write_scene(&dir, INSTANT_SCENE);
    let output = dir.join("output.png");

    std::fs::write(&output, b"").unwrap();
    std::fs::set_permissions(&output, std::fs::Permissions::from_mode(0o444)).unwrap();

    let runner = RenderRunner::new(&scene, &output, RunnerConfig::default());
    match runner.run() {
        Err(Error::OutputWrite { path, .. }) => assert!(path.contains("output.png")),
        other => panic!("expected OutputWrite, got {:?}", other.err()),
    }
}

#[test]
fn test_missing_scene_fails_without_browser() {
    let dir = scratch_dir("missing");
    let output = dir.join("output.png");

    let runner = RenderRunner::new(dir.join("no-such-scene.html"), &output, RunnerConfig::default());
    assert!(matches!(runner.run(), Err(Error::SceneRead { .. })));
    assert!(!output.exists());
}

#[test]
fn test_custom_condition_is_carried() {
    let config = RunnerConfig {
        wait_condition: "window.__sceneReady === true".to_string(),
        ..Default::default()
    };
    assert_eq!(config.wait_condition, "window.__sceneReady === true");
    assert_eq!(config.poll_interval_ms, 100);
}
