use crate::{workspace_with, WORKED};
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_solve_worked_example() {
    let temp_dir = workspace_with("worked.puzzle", WORKED);

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("solve")
        .arg("worked")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Puzzle: worked"))
        .stdout(predicate::str::contains("2^7 * 3^6 * 5^5 * 7^4 * 11^3 * 13^2 * 17"))
        .stdout(predicate::str::contains("2^2 * 3^1 * 5^2 * 17^1 = 5100"));
}

#[test]
fn test_cli_solve_json_output() {
    let temp_dir = workspace_with("worked.puzzle", WORKED);

    let output = Command::cargo_bin("powersolve")
        .unwrap()
        .arg("solve")
        .arg("worked")
        .arg("--dir")
        .arg(temp_dir.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["puzzle_name"], "worked");
    assert_eq!(json["letters"][6]["name"], "g");
    assert_eq!(json["letters"][6]["base"], 17);
    assert_eq!(json["factors"]["2"], 7);
}

#[test]
fn test_cli_solve_reports_unmatched_prime() {
    // 10 * 25 * 9 = 2 * 3^2 * 5^3, and no letter carries exponent 3
    let temp_dir = workspace_with(
        "unmatched.puzzle",
        r#"
puzzle unmatched
  a = 10
  b^2 = 25
  c = 9
"#,
    );

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("solve")
        .arg("unmatched")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert().failure().stderr(predicate::str::contains(
        "no unassigned letter has exponent 3 for prime 5",
    ));
}

#[test]
fn test_cli_solve_reports_product_mismatch() {
    // Greedy pairing hands 2 to x, the first exponent-1 letter, so x = 3 fails
    let temp_dir = workspace_with(
        "mismatch.puzzle",
        r#"
puzzle mismatch
  x = 3
  y = 2
"#,
    );

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("solve")
        .arg("mismatch")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Product mismatch"));
}

#[test]
fn test_cli_solve_missing_puzzle() {
    let temp_dir = workspace_with("worked.puzzle", WORKED);

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("solve")
        .arg("nonexistent")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_solve_parse_error_points_at_source() {
    let temp_dir = workspace_with("broken.puzzle", "puzzle broken\n  a^2 * = 12\n");

    let mut cmd = Command::cargo_bin("powersolve").unwrap();
    cmd.arg("solve")
        .arg("broken")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}
