//! Integration tests for the ironcycle binary.
//!
//! These tests verify end-to-end behavior including:
//! - Strength scoring from a profiles file
//! - Phase prescription and its fallbacks
//! - History analysis output
//! - Session sorting

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ironcycle"))
}

fn write_profiles(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("profiles.json");
    fs::write(
        &path,
        r#"{"bench_press": 100.0, "squat": 140.0, "bent_over_row": 90.0, "deadlift": 180.0}"#,
    )
    .expect("Failed to write profiles");
    path
}

fn write_history(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("history.json");
    fs::write(
        &path,
        r#"[
  {
    "date": "2026-08-10T10:00:00Z",
    "name": "Push A",
    "total_series": 9,
    "split": {
      "Monday": [
        {"name": "Bench Press", "series": 4, "reps": 10, "load": 70.0},
        {"name": "Lateral Raise", "series": 3, "reps": 15, "load": 8.0},
        {"name": "Rope Pushdown", "series": 2, "reps": 12, "load": 25.0}
      ]
    }
  },
  {
    "date": "2026-08-03T10:00:00Z",
    "name": "Push A",
    "total_series": 7,
    "split": {
      "Monday": [
        {"name": "Bench Press", "series": 4, "reps": 10, "load": 67.5},
        {"name": "Lateral Raise", "series": 3, "reps": 15, "load": 8.0}
      ]
    }
  }
]"#,
    )
    .expect("Failed to write history");
    path
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Training load analysis and prescription engine",
        ));
}

#[test]
fn test_strength_scores_all_anchors() {
    let temp_dir = setup_test_dir();
    let profiles = write_profiles(&temp_dir);

    cli()
        .arg("strength")
        .arg("--bodyweight")
        .arg("80")
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bench Press"))
        .stdout(predicate::str::contains("Deadlift"))
        .stdout(predicate::str::contains("Global:"));
}

#[test]
fn test_strength_partial_profile_is_flagged() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("profiles.json");
    fs::write(&path, r#"{"bench_press": 100.0}"#).unwrap();

    cli()
        .arg("strength")
        .arg("--bodyweight")
        .arg("80")
        .arg("--profiles")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no 1RM on file"))
        .stdout(predicate::str::contains("partial profile"));
}

#[test]
fn test_prescribe_accumulation() {
    let temp_dir = setup_test_dir();
    let profiles = write_profiles(&temp_dir);

    cli()
        .arg("prescribe")
        .arg("--exercise")
        .arg("Bench Press")
        .arg("--phase")
        .arg("accumulation")
        .arg("--week")
        .arg("2")
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 x 10"));
}

#[test]
fn test_prescribe_unknown_phase_falls_back() {
    let temp_dir = setup_test_dir();
    let profiles = write_profiles(&temp_dir);

    cli()
        .arg("prescribe")
        .arg("--exercise")
        .arg("Bench Press")
        .arg("--phase")
        .arg("block-o-rama")
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown phase"));
}

#[test]
fn test_prescribe_without_anchor_data_explains_itself() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("profiles.json");
    fs::write(&path, r#"{}"#).unwrap();

    cli()
        .arg("prescribe")
        .arg("--exercise")
        .arg("Bench Press")
        .arg("--phase")
        .arg("accumulation")
        .arg("--profiles")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No prescription"));
}

#[test]
fn test_prescribe_unknown_exercise_fails() {
    let temp_dir = setup_test_dir();
    let profiles = write_profiles(&temp_dir);

    cli()
        .arg("prescribe")
        .arg("--exercise")
        .arg("Underwater Basket Press")
        .arg("--phase")
        .arg("accumulation")
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .failure();
}

#[test]
fn test_prescribe_json_output() {
    let temp_dir = setup_test_dir();
    let profiles = write_profiles(&temp_dir);

    let output = cli()
        .arg("prescribe")
        .arg("--exercise")
        .arg("Bench Press")
        .arg("--phase")
        .arg("false_pyramid")
        .arg("--profiles")
        .arg(&profiles)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("prescription is not valid JSON");
    assert_eq!(parsed["fixed_load"], serde_json::json!(true));
    assert_eq!(parsed["reps"], serde_json::json!(12));
}

#[test]
fn test_analyze_reports_recovery() {
    let temp_dir = setup_test_dir();
    let history = write_history(&temp_dir);

    cli()
        .arg("analyze")
        .arg("--history")
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly statistics"))
        .stdout(predicate::str::contains("Recovery score"));
}

#[test]
fn test_analyze_json_output() {
    let temp_dir = setup_test_dir();
    let history = write_history(&temp_dir);
    let profiles = write_profiles(&temp_dir);

    let output = cli()
        .arg("analyze")
        .arg("--history")
        .arg(&history)
        .arg("--profiles")
        .arg(&profiles)
        .arg("--bodyweight")
        .arg("80")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("report is not valid JSON");
    assert!(parsed["weekly_stats"].as_array().unwrap().len() >= 2);
    assert!(parsed["trends"]["recovery_score"].is_number());
}

#[test]
fn test_sort_orders_heavy_compounds_first() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("session.json");
    fs::write(
        &path,
        r#"["Machine Curl", "Lateral Raise", "Back Squat", "Bench Press"]"#,
    )
    .unwrap();

    cli()
        .arg("sort")
        .arg("--session")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Back Squat"));
}
