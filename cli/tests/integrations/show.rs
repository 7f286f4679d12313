use crate::{workspace_with, WORKED};
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_show_lists_expressions() {
    let temp_dir = workspace_with("worked.puzzle", WORKED);

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("show")
        .arg("worked")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Puzzle: worked"))
        .stdout(predicate::str::contains("a^2 * b * c^2 * g = 5100"))
        .stdout(predicate::str::contains("combined: "));
}

#[test]
fn test_cli_show_missing_puzzle() {
    let temp_dir = workspace_with("worked.puzzle", WORKED);

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("show")
        .arg("other")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Puzzle 'other' not found"));
}
