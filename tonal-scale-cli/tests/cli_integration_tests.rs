//! Integration tests for the tonalscale CLI
//!
//! Tests command-line interface functionality including:
//! - Param resolution from flags, files and query strings
//! - Ramp output in each format
//! - Error handling and exit codes

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary path
fn get_cli_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    if path.ends_with("deps") {
        path.pop(); // Remove "deps" directory
    }
    path.push("tonalscale");
    #[cfg(windows)]
    path.set_extension("exe");
    path
}

fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

fn run_cli_command(args: &[&str]) -> Result<Output> {
    let output = Command::new(get_cli_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_generate_text_defaults() {
    let output = run_cli_command(&["generate"]).expect("CLI command should run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "  0 #000000");
    assert_eq!(lines[41], " 41 #8000ff  base");
    assert_eq!(lines[100], "100 #ffffff");
}

#[test]
fn test_generate_json_to_file() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("scale.json");

    let output = run_cli_command(&[
        "generate",
        "--color",
        "#7d4bff",
        "--blend",
        "#ed735f",
        "--mode",
        "overlay",
        "--strength",
        "65",
        "--middle",
        "10",
        "--spread",
        "20",
        "--sat-darker",
        "35",
        "--sat-lighter",
        "15",
        "--format",
        "json",
        "-o",
        output_path.to_str().unwrap(),
    ])
    .expect("CLI command should run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Tonal scale written to"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(json["baseHex"], "#7d4bff");
    assert_eq!(json["blendHex"], "#ed735f");
    assert_eq!(json["scale"]["luminance"], 48);
    assert_eq!(json["scale"]["colorScale"][0]["hex"], "#000000");
    assert_eq!(json["params"]["blendMode"], "overlay");
    assert_eq!(json["metadata"].as_array().map(Vec::len), Some(101));
}

#[test]
fn test_generate_svg() {
    let output = run_cli_command(&[
        "generate",
        "--query",
        "colorHex=336699",
        "--format",
        "svg",
        "--url",
        "https://example.test/?a=1&b=2",
    ])
    .expect("CLI command should run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let svg = stdout(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("#336699"));
    assert!(svg.contains("https://example.test/?a=1&amp;b=2"));
    assert_eq!(svg.matches("<rect").count(), 101 + 19 + 17);
    assert!(svg.contains(r#"height="120""#));
}

#[test]
fn test_pairs_hsv_header() {
    let output =
        run_cli_command(&["pairs", "100", "--color", "#336699"]).expect("CLI command should run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).lines().next(),
        Some("100 #ffffff  hsv(0, 0%, 100%)")
    );
}

#[test]
fn test_contrast() {
    let output = run_cli_command(&["contrast", "#000", "#ffffff"]).expect("CLI command should run");
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().next(), Some("21:1"));
    assert!(text.contains("AA normal text: pass"));

    let output = run_cli_command(&["contrast", "#ff0000", "#ffffff"]).expect("CLI command should run");
    let text = stdout(&output);
    assert_eq!(text.lines().next(), Some("4:1"));
    assert!(text.contains("AA large text:  pass"));
    assert!(text.contains("AA normal text: fail"));
}

#[test]
fn test_contrast_invalid_hex() {
    let output = run_cli_command(&["contrast", "#zzzzzz", "#ffffff"]).expect("CLI command should run");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid hex color"));
}

#[test]
fn test_pairs() {
    let output = run_cli_command(&["pairs", "0"]).expect("CLI command should run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert_eq!(text.lines().next(), Some("  0 #000000  hsv(0, 0%, 0%)"));
    assert!(text.contains("darker 3:1     none"));
    assert!(text.contains("lighter 4.5:1"));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn test_pairs_out_of_bounds() {
    let output = run_cli_command(&["pairs", "101"]).expect("CLI command should run");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("out of bounds"));
}

#[test]
fn test_curve() {
    let output = run_cli_command(&["curve", "--middle", "-10"]).expect("CLI command should run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("# width 40% line #e2e8f0"));
    assert_eq!(lines.next(), Some("0 0.0000"));
    assert_eq!(lines.count(), 40);
}

#[test]
fn test_params_precedence() {
    let temp_dir = setup_temp_dir();
    let params_path = temp_dir.path().join("params.json");
    fs::write(
        &params_path,
        r##"{"colorHex":"#336699","blendMode":"screen","middle":20,"spread":"75"}"##,
    )
    .unwrap();

    let output = run_cli_command(&[
        "params",
        "--params",
        params_path.to_str().unwrap(),
        "--query",
        "middle=-5&satDarker=40",
        "--spread",
        "10",
    ])
    .expect("CLI command should run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let query = text.lines().last().unwrap();
    assert_eq!(
        query,
        "?colorHex=336699&blendMode=screen&blendStrength=0&blendR=0&blendG=0&blendB=50&middle=-5&spread=10&satDarker=40&satLighter=0"
    );
    assert!(text.contains(r##""colorHex": "#336699""##));
}

#[test]
fn test_params_out_of_range_flag() {
    let output = run_cli_command(&["params", "--strength", "150"]).expect("CLI command should run");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("blendStrength"));
}

#[test]
fn test_unknown_blend_mode() {
    let output = run_cli_command(&["generate", "--mode", "dissolve"]).expect("CLI command should run");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("dissolve"));
}

#[test]
fn test_missing_params_file() {
    let temp_dir = setup_temp_dir();
    let missing = temp_dir.path().join("missing.json");
    let output = run_cli_command(&["generate", "--params", missing.to_str().unwrap()])
        .expect("CLI command should run");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read params file"));
}

#[test]
fn test_help() {
    let output = run_cli_command(&["--help"]).expect("CLI command should run");
    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["generate", "contrast", "pairs", "curve", "params"] {
        assert!(text.contains(command), "{command} missing from help");
    }
}
