use predicates::prelude::*;
use speakeasy_helpers::test_utils::{
    ARAZZO_FIXTURE, ARAZZO_MALFORMED_ENTRIES_FIXTURE, ARAZZO_THREE_WORKFLOWS_FIXTURE,
    GEN_LOCK_FIXTURE, GEN_LOCK_WITH_MANAGEMENT_FIXTURE,
};

use crate::common::{TestProject, generated_tests, workflow_ids};

/// Both requested operations disappear from both documents
#[test]
fn test_reset_removes_entries_from_both_files() {
    let project = TestProject::with_documents(GEN_LOCK_FIXTURE, ARAZZO_FIXTURE).unwrap();

    project
        .reset_tests(&["activity", "feedback"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 entries from .speakeasy/gen.lock"))
        .stdout(predicate::str::contains("Deleted 2 workflows from .speakeasy/test.arazzo.yaml"))
        .stdout(predicate::str::contains(
            "Successfully deleted test entries for operation IDs: activity, feedback",
        ));

    let tests = generated_tests(&project.files().read_gen_lock().unwrap());
    assert_eq!(
        tests,
        vec![
            "createannouncement",
            "createdraftannouncement",
            "deleteannouncement",
            "deletedraftannouncement",
            "getannouncement",
            "getdraftannouncement",
        ]
    );
    assert!(workflow_ids(&project.files().read_arazzo().unwrap()).is_empty());
}

/// Removing one workflow keeps the others in their original order
#[test]
fn test_reset_single_operation_keeps_order() {
    let project =
        TestProject::with_documents(GEN_LOCK_FIXTURE, ARAZZO_THREE_WORKFLOWS_FIXTURE).unwrap();

    project.reset_tests(&["activity"]).assert().success();

    assert_eq!(
        workflow_ids(&project.files().read_arazzo().unwrap()),
        vec!["feedback", "createannouncement"]
    );
    let tests = generated_tests(&project.files().read_gen_lock().unwrap());
    assert!(!tests.contains(&"activity".to_string()));
    assert_eq!(tests.len(), 7);
}

/// Running the same reset twice changes nothing the second time
#[test]
fn test_reset_is_idempotent() {
    let project =
        TestProject::with_documents(GEN_LOCK_FIXTURE, ARAZZO_THREE_WORKFLOWS_FIXTURE).unwrap();

    project.reset_tests(&["feedback"]).assert().success();
    let lock_after_first = project.files().read_gen_lock().unwrap();
    let arazzo_after_first = project.files().read_arazzo().unwrap();

    project
        .reset_tests(&["feedback"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found to delete in .speakeasy/gen.lock"))
        .stdout(predicate::str::contains(
            "No workflows found to delete in .speakeasy/test.arazzo.yaml",
        ));

    assert_eq!(project.files().read_gen_lock().unwrap(), lock_after_first);
    assert_eq!(project.files().read_arazzo().unwrap(), arazzo_after_first);
}

/// Unknown operation IDs leave both files byte-for-byte identical
#[test]
fn test_reset_unknown_ids_does_not_rewrite() {
    let project = TestProject::with_documents(GEN_LOCK_FIXTURE, ARAZZO_FIXTURE).unwrap();

    project.reset_tests(&["doesnotexist"]).assert().success();

    assert_eq!(project.files().read_gen_lock().unwrap(), GEN_LOCK_FIXTURE);
    assert_eq!(project.files().read_arazzo().unwrap(), ARAZZO_FIXTURE);
}

/// Missing files are warnings, not failures
#[test]
fn test_reset_with_missing_files() {
    let project = TestProject::new().unwrap();

    project
        .reset_tests(&["activity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: .speakeasy/gen.lock does not exist, skipping"))
        .stdout(predicate::str::contains(
            "Warning: .speakeasy/test.arazzo.yaml does not exist, skipping",
        ));

    assert!(!project.project_path().join(".speakeasy").exists());
}

/// Only the Arazzo document present: the lockfile is skipped, workflows pruned
#[test]
fn test_reset_with_only_arazzo() {
    let project = TestProject::new().unwrap();
    project.files().write_arazzo(ARAZZO_THREE_WORKFLOWS_FIXTURE).unwrap();

    project
        .reset_tests(&["createannouncement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: .speakeasy/gen.lock does not exist"))
        .stdout(predicate::str::contains("Deleted 1 workflows"));

    assert!(!project.files().gen_lock_path().exists());
    assert_eq!(
        workflow_ids(&project.files().read_arazzo().unwrap()),
        vec!["activity", "feedback"]
    );
}

/// Extra lockfile sections and workflow fields survive the rewrite
#[test]
fn test_reset_preserves_unknown_fields() {
    let project =
        TestProject::with_documents(GEN_LOCK_WITH_MANAGEMENT_FIXTURE, ARAZZO_FIXTURE).unwrap();

    project.reset_tests(&["activity"]).assert().success();

    let lock: serde_yaml::Value =
        serde_yaml::from_str(&project.files().read_gen_lock().unwrap()).unwrap();
    let original_lock: serde_yaml::Value =
        serde_yaml::from_str(GEN_LOCK_WITH_MANAGEMENT_FIXTURE).unwrap();
    for key in ["management", "features", "generatedFiles"] {
        assert_eq!(lock.get(key), original_lock.get(key), "{key} changed");
    }

    let arazzo: serde_yaml::Value =
        serde_yaml::from_str(&project.files().read_arazzo().unwrap()).unwrap();
    let original_arazzo: serde_yaml::Value = serde_yaml::from_str(ARAZZO_FIXTURE).unwrap();
    assert_eq!(arazzo.get("info"), original_arazzo.get("info"));
    assert_eq!(arazzo.get("sourceDescriptions"), original_arazzo.get("sourceDescriptions"));
    assert_eq!(
        arazzo["workflows"][0], original_arazzo["workflows"][1],
        "kept workflow must be unchanged"
    );
}

/// Entries without a usable workflowId are never removed
#[test]
fn test_reset_keeps_malformed_workflows() {
    let project =
        TestProject::with_documents(GEN_LOCK_FIXTURE, ARAZZO_MALFORMED_ENTRIES_FIXTURE).unwrap();

    project.reset_tests(&["activity", "feedback"]).assert().success();

    let arazzo: serde_yaml::Value =
        serde_yaml::from_str(&project.files().read_arazzo().unwrap()).unwrap();
    let workflows = arazzo["workflows"].as_sequence().unwrap();
    assert_eq!(workflows.len(), 3);
    assert_eq!(workflows[0].as_str(), Some("just a string"));
}

/// Without a workflows list the Arazzo document is left alone
#[test]
fn test_reset_without_workflows_list() {
    let content = "arazzo: 1.0.1\ninfo:\n  title: Test Suite\n  version: 0.0.1\n";
    let project = TestProject::with_documents(GEN_LOCK_FIXTURE, content).unwrap();

    project
        .reset_tests(&["activity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workflows found in .speakeasy/test.arazzo.yaml"));

    assert_eq!(project.files().read_arazzo().unwrap(), content);
}

/// A corrupt lockfile aborts before the Arazzo document is touched
#[test]
fn test_reset_corrupt_lockfile_fails() {
    let project =
        TestProject::with_documents("generatedTests: [unclosed\n", ARAZZO_FIXTURE).unwrap();

    project
        .reset_tests(&["activity"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to process gen.lock"))
        .stderr(predicate::str::contains("suggestion"));

    assert_eq!(project.files().read_arazzo().unwrap(), ARAZZO_FIXTURE);
}

/// A corrupt Arazzo document fails after the lockfile was already pruned
#[test]
fn test_reset_corrupt_arazzo_fails() {
    let project = TestProject::with_documents(GEN_LOCK_FIXTURE, "- just\n- a list\n").unwrap();

    project
        .reset_tests(&["activity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to process test.arazzo.yaml"));

    let tests = generated_tests(&project.files().read_gen_lock().unwrap());
    assert!(!tests.contains(&"activity".to_string()));
}

/// --quiet suppresses progress output
#[test]
fn test_reset_quiet() {
    let project = TestProject::with_documents(GEN_LOCK_FIXTURE, ARAZZO_FIXTURE).unwrap();

    project
        .command()
        .args(["--quiet", "reset-tests", "--operation-id", "activity"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(workflow_ids(&project.files().read_arazzo().unwrap()), vec!["feedback"]);
}

/// --verbose writes diagnostics to stderr and leaves stdout unchanged
#[test]
fn test_reset_verbose_logs_to_stderr() {
    let project = TestProject::with_documents(GEN_LOCK_FIXTURE, ARAZZO_FIXTURE).unwrap();

    project
        .command()
        .args(["--verbose", "reset-tests", "--operation-id", "activity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully deleted test entries"))
        .stderr(predicate::str::contains("Resetting tests for 1 operation IDs"));
}

/// Missing files and deletions are also logged on stderr at the default level
#[test]
fn test_reset_logs_warnings_and_deletions() {
    let project = TestProject::new().unwrap();
    project.files().write_gen_lock(GEN_LOCK_FIXTURE).unwrap();

    project
        .reset_tests(&["activity", "feedback"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleted 2 generated tests from"))
        .stderr(predicate::str::contains("test.arazzo.yaml does not exist, skipping"))
        .stderr(predicate::str::contains("DEBUG").not());
}

/// --quiet silences the log as well as the progress lines
#[test]
fn test_reset_quiet_has_no_diagnostics() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["-q", "reset-tests", "--operation-id", "activity"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

/// Non-string header fields and numeric keys do not stop the reset
#[test]
fn test_reset_lockfile_with_numeric_scalars() {
    let project = TestProject::new().unwrap();
    project
        .files()
        .write_gen_lock("lockVersion: 2\nid: 12345\ngeneratedTests:\n  123: x\n  activity: y\n")
        .unwrap();

    project
        .reset_tests(&["123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 entries from .speakeasy/gen.lock"));

    assert_eq!(generated_tests(&project.files().read_gen_lock().unwrap()), vec!["activity"]);
}

/// A lockfile that is not UTF-8 is reported as unparseable
#[test]
fn test_reset_non_utf8_lockfile_fails_as_parse_error() {
    let project = TestProject::new().unwrap();
    project.files().write_gen_lock("placeholder").unwrap();
    std::fs::write(project.files().gen_lock_path(), b"\xff\xfe").unwrap();

    project
        .reset_tests(&["activity"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"))
        .stderr(predicate::str::contains("not valid UTF-8"));
}
