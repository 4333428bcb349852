use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_eval_simple_expression() {
    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("eval").arg("12-2*1+0");

    cmd.assert().success().stdout("10\n");
}

#[test]
fn test_eval_alias_and_truncation() {
    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("eval").arg("3×4");
    cmd.assert().success().stdout("12\n");

    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("eval").arg("7/2");
    cmd.assert().success().stdout("3\n");
}

#[test]
fn test_eval_division_by_zero_fails() {
    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("eval").arg("6/0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn test_eval_disallowed_character_fails() {
    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("eval").arg("2^2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not allowed"));
}

#[test]
fn test_eval_leading_operator_is_malformed() {
    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("eval").arg("-2+4");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed expression"));
}
