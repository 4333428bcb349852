use assert_cmd::Command;

#[test]
fn test_server_command_available() {
    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("server"));
}

#[test]
fn test_server_requires_configuration() {
    let mut cmd = Command::cargo_bin("mathler").unwrap();
    cmd.arg("server")
        .arg("--config")
        .arg("/nonexistent/puzzles.toml");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to read configuration"));
}
