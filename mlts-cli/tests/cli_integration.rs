//! Integration tests for the MLTS command-line tools

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn generate_result() -> Command {
    let mut cmd = Command::cargo_bin("generate-result").unwrap();
    cmd.env("MLTS_CHART_SCRIPT", fixture_path("Chart.bundle.min.js"))
        .env_remove("MLTS_REPORT_CONFIG");
    cmd
}

#[test]
fn test_generate_report() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("result.html");

    generate_result()
        .arg(fixture_path("benchmark.csv"))
        .arg(&output_file)
        .assert()
        .success();

    let html = fs::read_to_string(&output_file).unwrap();
    assert!(html.contains("Benchmark for Pixel 2 (walleye), started at 2018-05-04 10:00:00"));
    assert!(html.contains("window.Chart = function () {};"));
    assert!(html.contains("<td>25.00ms</td>")); // nnapi: 2.0s / 80
    assert!(html.contains("<td>70.000%</td>"));
    assert!(html.contains("<th>Max Mel Cep distortion</th>"));

    let nnapi = html.find("<td>nnapi</td>").unwrap();
    let tflite = html.find("<td>tflite</td>").unwrap();
    assert!(nnapi < tflite);
}

#[test]
fn test_report_config_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("result.html");
    let config_file = temp_dir.path().join("report.toml");
    fs::write(&config_file, "title = \"Nightly NNAPI run\"\nchart_width_px = 320\n").unwrap();

    generate_result()
        .env("MLTS_REPORT_CONFIG", &config_file)
        .arg(fixture_path("benchmark.csv"))
        .arg(&output_file)
        .assert()
        .success();

    let html = fs::read_to_string(&output_file).unwrap();
    assert!(html.contains("<title>Nightly NNAPI run</title>"));
    assert!(html.contains("width: 320px;"));
}

#[test]
fn test_malformed_input_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("result.html");

    generate_result()
        .arg(fixture_path("malformed.csv"))
        .arg(&output_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("format error at line 2"));

    assert!(!output_file.exists());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();

    generate_result()
        .arg("nonexistent.csv")
        .arg(temp_dir.path().join("result.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.csv"));
}

#[test]
fn test_missing_chart_script() {
    let temp_dir = TempDir::new().unwrap();

    generate_result()
        .env("MLTS_CHART_SCRIPT", temp_dir.path().join("Chart.bundle.min.js"))
        .arg(fixture_path("benchmark.csv"))
        .arg(temp_dir.path().join("result.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chart.bundle.min.js"));
}

#[test]
fn test_generate_result_requires_two_args() {
    generate_result()
        .arg(fixture_path("benchmark.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("OUTPUT"));
}

#[test]
fn test_help_command() {
    generate_result()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchmark CSV log"));
}

#[test]
fn test_gen_tts_data() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("gen-tts-data")
        .unwrap()
        .arg(fixture_path("tts_input.csv"))
        .arg(fixture_path("tts_output.csv"))
        .arg(temp_dir.path())
        .assert()
        .success();

    let input = fs::read(temp_dir.path().join("tts.input")).unwrap();
    let expected: Vec<u8> = [0.5f32, 1.0, -2.0, 4.0]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    assert_eq!(input, expected);

    let output = fs::read(temp_dir.path().join("tts.output")).unwrap();
    assert_eq!(output.len(), 8);
}

#[test]
fn test_gen_tts_data_help_command() {
    Command::cargo_bin("gen-tts-data")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("raw float32 files"));
}

#[test]
fn test_gen_tts_data_usage() {
    Command::cargo_bin("gen-tts-data")
        .unwrap()
        .arg(fixture_path("tts_input.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_gen_tts_data_missing_output_dir() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("gen-tts-data")
        .unwrap()
        .arg(fixture_path("tts_input.csv"))
        .arg(fixture_path("tts_output.csv"))
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}
