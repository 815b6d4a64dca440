//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("cidstamp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stamp IPFS content identifiers"))
        .stdout(predicate::str::contains(
            "Compute the CID of a package and write it into its pkginfo",
        ))
        .stdout(predicate::str::contains("Describe the step's input and output variables"));
}

#[test]
fn test_run_help() {
    Command::cargo_bin("cidstamp")
        .unwrap()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pkginfo-path"))
        .stdout(predicate::str::contains("--artifact-path"))
        .stdout(predicate::str::contains("--env-file"));
}

#[test]
fn test_info_help() {
    Command::cargo_bin("cidstamp")
        .unwrap()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("input and output variables"));
}

#[test]
fn test_info_lists_variables() {
    Command::cargo_bin("cidstamp")
        .unwrap()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("pkginfo_path"))
        .stdout(predicate::str::contains("tool_stderr"));
}

#[test]
fn test_info_json() {
    let output = Command::cargo_bin("cidstamp")
        .unwrap()
        .args(["info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["input_variables"][1]["name"], "artifact_path");
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("cidstamp")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}
