use super::{write_config, PUZZLES};
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_list_shows_targets_not_solutions() {
    let (_dir, config) = write_config(PUZZLES);

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("list").arg("--config").arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Target"))
        .stdout(predicate::str::contains("42"))
        .stdout(predicate::str::contains("2 puzzle(s), 8 symbols per equation"))
        .stdout(predicate::str::contains("12-2*1+0").not());
}

#[test]
fn test_list_bundled_configuration() {
    let config = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("puzzles.toml");

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("list").arg("--config").arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("16 puzzle(s)"))
        .stderr(predicate::str::contains("Skipping").not());
}
