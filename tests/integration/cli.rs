use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_help_lists_reset_tests() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reset-tests"))
        .stdout(predicate::str::contains("Speakeasy generated API clients"));
}

#[test]
fn test_reset_tests_help_describes_flag() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["reset-tests", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--operation-id"))
        .stdout(predicate::str::contains("can be specified multiple times"));
}

#[test]
fn test_version_flag() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "speakeasy-helpers ",
            env!("CARGO_PKG_VERSION"),
            " (commit: "
        )))
        .stdout(predicate::str::contains(", built: "));
}

#[test]
fn test_invalid_flag_fails() {
    let project = TestProject::new().unwrap();

    project.command().arg("--invalid").assert().failure();
}

#[test]
fn test_missing_operation_id_fails_without_touching_files() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .arg("reset-tests")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--operation-id"));

    assert!(!project.project_path().join(".speakeasy").exists());
}
