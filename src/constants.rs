//! File-system locations shared by the commands.
//!
//! Speakeasy keeps its generator state in a hidden directory at the project
//! root. Every path here is relative to that root.

/// Hidden directory holding generator state.
pub const SPEAKEASY_DIR: &str = ".speakeasy";

/// Lockfile recording which operations already have generated tests.
pub const GEN_LOCK_FILE: &str = "gen.lock";

/// Workflow-test definitions, one Arazzo workflow per tested operation.
pub const ARAZZO_FILE: &str = "test.arazzo.yaml";

/// Top-level lockfile key mapping operation IDs to generation timestamps.
pub const GENERATED_TESTS_KEY: &str = "generatedTests";

/// Top-level Arazzo key holding the ordered workflow list.
pub const WORKFLOWS_KEY: &str = "workflows";

/// Workflow field used as the workflow's identity.
pub const WORKFLOW_ID_KEY: &str = "workflowId";
