use super::{write_config, PUZZLES};
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_check_solved_guess() {
    let (_dir, config) = write_config(PUZZLES);

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("check")
        .arg("12-2*1+0")
        .arg("--target")
        .arg("10")
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "States: CORRECT CORRECT CORRECT CORRECT CORRECT CORRECT CORRECT CORRECT",
        ))
        .stdout(predicate::str::contains("Result: solved"));
}

#[test]
fn test_check_wrong_value() {
    let (_dir, config) = write_config(PUZZLES);

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("check")
        .arg("12-2*1-1")
        .arg("-t")
        .arg("10")
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Value:  9"))
        .stdout(predicate::str::contains("Result: invalid"))
        .stdout(predicate::str::contains("wrong value"));
}

#[test]
fn test_check_raw_json() {
    let (_dir, config) = write_config(PUZZLES);

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("check")
        .arg("20/2+0*5")
        .arg("--target")
        .arg("10")
        .arg("--config")
        .arg(&config)
        .arg("--raw");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["solved"], false);
    assert_eq!(json["calculatedValue"], 10);
    assert_eq!(
        json["states"],
        serde_json::json!([
            "PRESENT", "PRESENT", "ABSENT", "CORRECT", "PRESENT", "ABSENT", "PRESENT", "ABSENT"
        ])
    );
}

#[test]
fn test_check_reports_skipped_definitions() {
    let (_dir, config) = write_config(PUZZLES);

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("check")
        .arg("6*7+00-0")
        .arg("--target")
        .arg("42")
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("not-a-puzzle"));
}

#[test]
fn test_check_unknown_target() {
    let (_dir, config) = write_config(PUZZLES);

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("check")
        .arg("12-2*1+0")
        .arg("--target")
        .arg("11")
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no puzzle for target 11"));
}

#[test]
fn test_check_empty_configuration_fails() {
    let (_dir, config) = write_config("puzzles = [\"1:1:1\"]\n");

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("check")
        .arg("12-2*1+0")
        .arg("--target")
        .arg("10")
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No puzzles configured"));
}

#[test]
fn test_check_missing_configuration_fails() {
    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("check")
        .arg("12-2*1+0")
        .arg("--target")
        .arg("10")
        .arg("--config")
        .arg("/nonexistent/puzzles.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration"));
}
