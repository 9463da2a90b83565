//! Sample `.speakeasy` documents for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{ARAZZO_FILE, GEN_LOCK_FILE, SPEAKEASY_DIR};

/// A lockfile with eight generated tests.
pub const GEN_LOCK_FIXTURE: &str = r#"lockVersion: 2.0.0
id: 3e3290ca-0ee8-4981-b1bc-14536048fa63
generatedTests:
  activity: "2025-04-28T22:05:12+01:00"
  feedback: "2025-04-28T22:05:12+01:00"
  createannouncement: "2025-04-28T22:05:12+01:00"
  createdraftannouncement: "2025-04-28T22:05:12+01:00"
  deleteannouncement: "2025-04-28T22:05:12+01:00"
  deletedraftannouncement: "2025-04-28T22:05:12+01:00"
  getannouncement: "2025-04-28T22:05:12+01:00"
  getdraftannouncement: "2025-04-28T22:05:12+01:00"
"#;

/// A lockfile carrying the extra sections a real generator writes.
pub const GEN_LOCK_WITH_MANAGEMENT_FIXTURE: &str = r#"lockVersion: 2.0.0
id: 3e3290ca-0ee8-4981-b1bc-14536048fa63
management:
  docChecksum: 2d4fbb8d1f2d0d4e8e3d4a8d63a2c4d1
  docVersion: 0.9.0
  speakeasyVersion: 1.540.1
features:
  python:
    core: 5.18.1
    tests: 1.4.2
generatedFiles:
  - src/client/__init__.py
  - tests/test_client.py
generatedTests:
  activity: "2025-04-28T22:05:12+01:00"
  feedback: "2025-04-28T22:05:12+01:00"
  createannouncement: "2025-04-28T22:05:12+01:00"
"#;

/// An Arazzo document with `activity` and `feedback` workflows.
pub const ARAZZO_FIXTURE: &str = r#"arazzo: 1.0.1
info:
  title: Test Suite
  summary: Created from /Users/da/code/misc/api-client-python/.speakeasy/temp/665c0f/openapi/bundle/openapi.yaml
  version: 0.0.1
sourceDescriptions:
  - name: /Users/da/code/misc/api-client-python/.speakeasy/temp/665c0f/openapi/bundle/openapi.yaml
    url: https://TBD.com
    type: openapi
workflows:
  - workflowId: activity
    steps:
      - stepId: test
        operationId: activity
        requestBody:
          contentType: application/json
          payload:
            events:
              - action: HISTORICAL_VIEW
                timestamp: "2000-01-23T04:56:07.000Z"
                url: https://example.com/
        successCriteria:
          - condition: $statusCode == 200
    x-speakeasy-test-group: client_activity
  - workflowId: feedback
    steps:
      - stepId: test
        operationId: feedback
        requestBody:
          contentType: application/json
          payload:
            message: "test feedback"
        successCriteria:
          - condition: $statusCode == 200
    x-speakeasy-test-group: client_feedback
"#;

/// An Arazzo document with three minimal workflows.
pub const ARAZZO_THREE_WORKFLOWS_FIXTURE: &str = r#"arazzo: 1.0.1
info:
  title: Test Suite
  version: 0.0.1
workflows:
  - workflowId: activity
    steps:
      - stepId: test
        operationId: activity
  - workflowId: feedback
    steps:
      - stepId: test
        operationId: feedback
  - workflowId: createannouncement
    steps:
      - stepId: test
        operationId: createannouncement
"#;

/// An Arazzo document whose list mixes well-formed and malformed entries.
pub const ARAZZO_MALFORMED_ENTRIES_FIXTURE: &str = r#"arazzo: 1.0.1
info:
  title: Test Suite
  version: 0.0.1
workflows:
  - workflowId: activity
  - just a string
  - steps:
      - stepId: orphan
        operationId: activity
  - workflowId: 42
  - workflowId: feedback
    x-speakeasy-test-group: client_feedback
"#;

/// A project directory with a `.speakeasy` folder.
#[derive(Debug, Clone)]
pub struct SpeakeasyFixture {
    root: PathBuf,
}

impl SpeakeasyFixture {
    /// Use `root` as the project directory. Nothing is written yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// The project directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `gen.lock` inside the project.
    pub fn gen_lock_path(&self) -> PathBuf {
        self.root.join(SPEAKEASY_DIR).join(GEN_LOCK_FILE)
    }

    /// Path of `test.arazzo.yaml` inside the project.
    pub fn arazzo_path(&self) -> PathBuf {
        self.root.join(SPEAKEASY_DIR).join(ARAZZO_FILE)
    }

    /// Write `content` as the project's lockfile.
    pub fn write_gen_lock(&self, content: &str) -> Result<()> {
        write_file(&self.gen_lock_path(), content)
    }

    /// Write `content` as the project's Arazzo document.
    pub fn write_arazzo(&self, content: &str) -> Result<()> {
        write_file(&self.arazzo_path(), content)
    }

    /// Read the lockfile back.
    pub fn read_gen_lock(&self) -> Result<String> {
        let path = self.gen_lock_path();
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Read the Arazzo document back.
    pub fn read_arazzo(&self) -> Result<String> {
        let path = self.arazzo_path();
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
