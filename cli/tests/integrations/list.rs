use crate::{workspace_with, WORKED};
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_cli_list_counts_puzzles() {
    let temp_dir = workspace_with("worked.puzzle", WORKED);
    fs::write(
        temp_dir.path().join("small.puzzle"),
        "puzzle small\n  a = 2\n  b^2 = 9\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 2 puzzle(s) in 2 file(s)"))
        .stdout(predicate::str::contains("worked"))
        .stdout(predicate::str::contains("small"));
}

#[test]
fn test_cli_list_rejects_duplicate_names() {
    let temp_dir = workspace_with("one.puzzle", "puzzle twin\n  a = 2\n");
    fs::write(temp_dir.path().join("two.puzzle"), "puzzle twin\n  b = 3\n").unwrap();

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("twin"));
}
