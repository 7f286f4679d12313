use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_factor() {
    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("factor").arg("5100");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5100 = 2^2 * 3 * 5^2 * 17"));
}

#[test]
fn test_cli_factor_prime_outside_table() {
    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("factor").arg("2253");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unfactorizable"))
        .stderr(predicate::str::contains("751"));
}

#[test]
fn test_cli_factor_rejects_one() {
    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("factor").arg("1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_cli_factor_logs_through_rust_log() {
    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.env("RUST_LOG", "powersolve=debug").arg("factor").arg("5100");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("factorized"));
}

#[test]
fn test_cli_factor_is_quiet_by_default() {
    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.env_remove("RUST_LOG").arg("factor").arg("5100");

    cmd.assert().success().stderr(predicate::str::is_empty());
}
