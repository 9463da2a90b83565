//! The Speakeasy generation lockfile (`.speakeasy/gen.lock`).
//!
//! The generator records every operation it has produced a test for under
//! `generatedTests`, keyed by operation ID:
//!
//! ```yaml
//! lockVersion: 2.0.0
//! id: 3e3290ca-0ee8-4981-b1bc-14536048fa63
//! management:
//!   docChecksum: 2d4fbb8d1f2d0d4e8e3d4a8d63a2c4d1
//! generatedTests:
//!   activity: "2025-04-28T22:05:12+01:00"
//!   feedback: "2025-04-28T22:05:12+01:00"
//! ```
//!
//! Deleting a key makes the next `speakeasy run` regenerate that test.
//!
//! # Fidelity
//!
//! [`GenLock`] keeps the whole document as an ordered YAML mapping and only
//! ever edits the `generatedTests` entry in place. Fields this tool knows
//! nothing about (`management`, `features`, `generatedFiles`, ...) are written
//! back unchanged and in their original order. The values under
//! `generatedTests` are treated as opaque; they are never parsed as dates.
//! Header fields such as `lockVersion` and `id` are read as plain scalar text
//! and never validated, and keys under `generatedTests` are matched on their
//! text, so an unquoted `123:` is the operation ID `"123"`.

mod io;


use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::borrow::Cow;
use std::path::Path;

use crate::constants::GENERATED_TESTS_KEY;
use crate::core::{HelperError, OperationIdSet, PruneOutcome};
use crate::utils::yaml::{kind_of, scalar_text};

/// The one part of a lockfile whose shape matters to this tool.
///
/// Only used to check a freshly parsed document; edits happen on the raw
/// mapping held by [`GenLock`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct GenLockSchema {
    #[serde(default)]
    generated_tests: Option<Mapping>,
}

/// A parsed `gen.lock` document.
#[derive(Debug, Clone, PartialEq)]
pub struct GenLock {
    document: Mapping,
}

impl GenLock {
    /// Parse lockfile content. `path` is only used for error messages.
    ///
    /// An empty document parses as a lockfile with no generated tests.
    ///
    /// # Errors
    ///
    /// [`HelperError::ParseError`] when the content is not YAML, the root is
    /// not a mapping, or `generatedTests` is present but not a mapping.
    pub fn parse(content: &str, path: &Path) -> Result<Self, HelperError> {
        let value: Value =
            serde_yaml::from_str(content).map_err(|e| HelperError::parse(path, e))?;

        let document = match value {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(HelperError::parse(
                    path,
                    format!("expected a mapping at the top level, found {}", kind_of(&other)),
                ));
            }
        };

        serde_yaml::from_value::<GenLockSchema>(Value::Mapping(document.clone()))
            .map_err(|e| HelperError::parse(path, e))?;

        Ok(Self {
            document,
        })
    }

    /// The `lockVersion` field as text, if it is a scalar.
    #[must_use]
    pub fn lock_version(&self) -> Option<Cow<'_, str>> {
        self.document.get("lockVersion").and_then(scalar_text)
    }

    /// The `id` field as text, if it is a scalar.
    #[must_use]
    pub fn id(&self) -> Option<Cow<'_, str>> {
        self.document.get("id").and_then(scalar_text)
    }

    /// Operation IDs that currently have a generated test, in file order.
    pub fn generated_tests(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.tests().into_iter().flat_map(|tests| tests.keys().filter_map(scalar_text))
    }

    /// The recorded value for `operation_id`, if any.
    #[must_use]
    pub fn generated_test(&self, operation_id: &str) -> Option<&Value> {
        self.tests()?
            .iter()
            .find(|(key, _)| scalar_text(key).is_some_and(|key| key == operation_id))
            .map(|(_, value)| value)
    }

    /// Whether `operation_id` has a generated test recorded.
    #[must_use]
    pub fn has_test(&self, operation_id: &str) -> bool {
        self.generated_test(operation_id).is_some()
    }

    /// Delete the `generatedTests` entries named in `ids`.
    ///
    /// Returns how many entries were removed. Remaining entries keep their
    /// relative order.
    pub fn remove_tests(&mut self, ids: &OperationIdSet) -> usize {
        let Some(Value::Mapping(tests)) = self.document.get_mut(GENERATED_TESTS_KEY) else {
            return 0;
        };

        let before = tests.len();
        tests.retain(|key, _| !scalar_text(key).is_some_and(|key| ids.contains(&key)));
        before - tests.len()
    }

    /// Serialize the document back to YAML.
    pub fn to_yaml(&self, path: &Path) -> Result<String, HelperError> {
        serde_yaml::to_string(&self.document).map_err(|e| HelperError::serialize(path, e))
    }

    fn tests(&self) -> Option<&Mapping> {
        self.document.get(GENERATED_TESTS_KEY).and_then(Value::as_mapping)
    }
}

/// Remove the generated-test entries for `ids` from the lockfile at `path`.
///
/// - Missing file: [`PruneOutcome::Missing`], nothing touched
/// - No matching keys: [`PruneOutcome::Unchanged`], file not rewritten
/// - Otherwise the file is rewritten atomically and
///   [`PruneOutcome::Pruned`] reports the number of deleted entries
///
/// # Errors
///
/// [`HelperError::ParseError`] for malformed content and
/// [`HelperError::IoError`] when reading or writing fails.
pub fn prune_gen_lock(path: &Path, ids: &OperationIdSet) -> Result<PruneOutcome, HelperError> {
    let Some(mut lock) = GenLock::load(path)? else {
        tracing::warn!("{} does not exist, skipping", path.display());
        return Ok(PruneOutcome::Missing);
    };

    tracing::debug!(
        "Loaded {} (lockVersion {}, {} generated tests)",
        path.display(),
        lock.lock_version().as_deref().unwrap_or("unknown"),
        lock.generated_tests().count()
    );

    let removed = lock.remove_tests(ids);
    if removed == 0 {
        return Ok(PruneOutcome::Unchanged);
    }

    lock.save(path)?;
    tracing::info!("Deleted {removed} generated tests from {}", path.display());
    Ok(PruneOutcome::Pruned {
        removed,
    })
}
