//! Loading and saving `gen.lock`.

use std::path::Path;

use crate::core::HelperError;
use crate::utils::fs::{read_if_exists, safe_write};

use super::GenLock;

impl GenLock {
    /// Load the lockfile at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist; the caller decides
    /// whether that matters.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use speakeasy_helpers::lockfile::GenLock;
    /// use std::path::Path;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// if let Some(lock) = GenLock::load(Path::new(".speakeasy/gen.lock"))? {
    ///     println!("{} generated tests", lock.generated_tests().count());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: &Path) -> Result<Option<Self>, HelperError> {
        read_if_exists(path)?.map(|content| Self::parse(&content, path)).transpose()
    }

    /// Write the lockfile to `path` atomically, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), HelperError> {
        safe_write(path, &self.to_yaml(path)?)
    }
}
