//! The generated Arazzo workflow-test document (`.speakeasy/test.arazzo.yaml`).
//!
//! Speakeasy writes one workflow per tested operation, identified by
//! `workflowId`:
//!
//! ```yaml
//! arazzo: 1.0.1
//! info:
//!   title: Test Suite
//!   version: 0.0.1
//! workflows:
//!   - workflowId: activity
//!     steps:
//!       - stepId: test
//!         operationId: activity
//!     x-speakeasy-test-group: client_activity
//! ```
//!
//! The document is handled as an untyped YAML tree. Only the top-level
//! `workflows` list and each entry's `workflowId` are ever inspected; every
//! other field, at any depth, is carried through a rewrite as-is.


use serde_yaml::{Mapping, Value};
use std::path::Path;

use crate::constants::{WORKFLOWS_KEY, WORKFLOW_ID_KEY};
use crate::core::{HelperError, OperationIdSet, PruneOutcome};
use crate::utils::fs::{read_if_exists, safe_write};
use crate::utils::yaml::{kind_of, str_field};

/// A parsed Arazzo document.
#[derive(Debug, Clone, PartialEq)]
pub struct ArazzoDocument {
    root: Mapping,
}

impl ArazzoDocument {
    /// Parse document content. `path` is only used for error messages.
    ///
    /// An empty document parses as one without workflows.
    ///
    /// # Errors
    ///
    /// [`HelperError::ParseError`] when the content is not YAML or its root is
    /// not a mapping.
    pub fn parse(content: &str, path: &Path) -> Result<Self, HelperError> {
        let value: Value =
            serde_yaml::from_str(content).map_err(|e| HelperError::parse(path, e))?;

        match value {
            Value::Null => Ok(Self {
                root: Mapping::new(),
            }),
            Value::Mapping(root) => Ok(Self {
                root,
            }),
            other => Err(HelperError::parse(
                path,
                format!("expected a mapping at the top level, found {}", kind_of(&other)),
            )),
        }
    }

    /// Load the document at `path`, or `None` if it does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, HelperError> {
        read_if_exists(path)?.map(|content| Self::parse(&content, path)).transpose()
    }

    /// Write the document to `path` atomically, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), HelperError> {
        safe_write(path, &self.to_yaml(path)?)
    }

    /// Serialize the document back to YAML.
    pub fn to_yaml(&self, path: &Path) -> Result<String, HelperError> {
        serde_yaml::to_string(&self.root).map_err(|e| HelperError::serialize(path, e))
    }

    /// The `workflows` list, or `None` when it is absent or not a sequence.
    #[must_use]
    pub fn workflows(&self) -> Option<&[Value]> {
        match self.root.get(WORKFLOWS_KEY) {
            Some(Value::Sequence(workflows)) => Some(workflows.as_slice()),
            _ => None,
        }
    }

    /// `workflowId`s of the well-formed entries, in document order.
    pub fn workflow_ids(&self) -> impl Iterator<Item = &str> {
        self.workflows().unwrap_or_default().iter().filter_map(workflow_id)
    }

    /// Remove every workflow whose `workflowId` is in `ids`.
    ///
    /// Returns `None` when there is no workflow list to filter, otherwise the
    /// number of entries removed. Entries that are not mappings or have no
    /// string `workflowId` are always kept, and kept entries stay in their
    /// original order.
    pub fn remove_workflows(&mut self, ids: &OperationIdSet) -> Option<usize> {
        let Some(Value::Sequence(workflows)) = self.root.get_mut(WORKFLOWS_KEY) else {
            return None;
        };

        let before = workflows.len();
        workflows.retain(|workflow| !workflow_id(workflow).is_some_and(|id| ids.contains(id)));
        Some(before - workflows.len())
    }
}

/// The identity of a workflow entry, if it has one.
#[must_use]
pub fn workflow_id(workflow: &Value) -> Option<&str> {
    str_field(workflow, WORKFLOW_ID_KEY)
}

/// Remove the workflows for `ids` from the Arazzo document at `path`.
///
/// - Missing file: [`PruneOutcome::Missing`], nothing touched
/// - No `workflows` sequence: [`PruneOutcome::NoWorkflows`], not an error
/// - No matching workflows: [`PruneOutcome::Unchanged`], file not rewritten
/// - Otherwise the file is rewritten atomically and
///   [`PruneOutcome::Pruned`] reports the number of deleted workflows
///
/// # Errors
///
/// [`HelperError::ParseError`] for malformed content and
/// [`HelperError::IoError`] when reading or writing fails.
pub fn prune_arazzo(path: &Path, ids: &OperationIdSet) -> Result<PruneOutcome, HelperError> {
    let Some(mut document) = ArazzoDocument::load(path)? else {
        tracing::warn!("{} does not exist, skipping", path.display());
        return Ok(PruneOutcome::Missing);
    };

    let Some(removed) = document.remove_workflows(ids) else {
        tracing::debug!("{} has no workflow list", path.display());
        return Ok(PruneOutcome::NoWorkflows);
    };

    if removed == 0 {
        return Ok(PruneOutcome::Unchanged);
    }

    let remaining = document.workflows().map_or(0, <[Value]>::len);
    document.save(path)?;
    tracing::info!(
        "Deleted {removed} workflows from {}, {remaining} remain",
        path.display()
    );
    Ok(PruneOutcome::Pruned {
        removed,
    })
}
