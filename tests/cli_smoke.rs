use std::fs;
use std::process::{Command, Output};

use serde_json::Value;

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_filament-estimator"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run filament-estimator")
}

#[test]
fn json_report_smoke() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("cube.gcode");
    fs::write(
        &file,
        ";filament_density = 1.24\n;filament_diameter = 1.75\n;filament_type = PLA\nG1 X10 E100\n",
    )
    .unwrap();

    let output = run_binary(&[file.to_str().unwrap(), "--format", "json"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    // First line is the file path, the rest is the JSON document
    let (path_line, json) = stdout.split_once('\n').expect("path line");
    assert!(path_line.ends_with("cube.gcode"));

    let report: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(report["profile"]["type"], "PLA");
    assert_eq!(report["layer_count"], 1);
    let grams = report["total_weight_g"].as_f64().unwrap();
    assert!((grams - 0.29825).abs() < 1e-4);
}

#[test]
fn missing_file_fails() {
    let output = run_binary(&["/no/such/file.gcode"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("file.gcode"));
}
