//! File system helpers for reading and atomically rewriting documents.
//!
//! Every failure is reported as [`HelperError::IoError`] with the operation
//! and path attached, so callers only need to add which document they were
//! processing.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::HelperError;

/// Read `path` to a string, or `None` if it does not exist.
///
/// A missing file is not an error for this tool; any other read failure is.
/// Content that is not valid UTF-8 is a [`HelperError::ParseError`], since the
/// file exists but cannot be a YAML document.
///
/// # Examples
///
/// ```rust,no_run
/// use speakeasy_helpers::utils::fs::read_if_exists;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// match read_if_exists(Path::new(".speakeasy/gen.lock"))? {
///     Some(content) => println!("{} bytes", content.len()),
///     None => println!("no lockfile yet"),
/// }
/// # Ok(())
/// # }
/// ```
pub fn read_if_exists(path: &Path) -> Result<Option<String>, HelperError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(HelperError::io("reading", path, e)),
    };

    String::from_utf8(bytes).map(Some).map_err(|e| {
        HelperError::parse(path, format!("file is not valid UTF-8: {}", e.utf8_error()))
    })
}

/// Ensure `path` exists as a directory, creating it and any parents.
pub fn ensure_dir(path: &Path) -> Result<(), HelperError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| HelperError::io("creating directory", path, e))?;
    } else if !path.is_dir() {
        return Err(HelperError::io(
            "creating directory",
            path,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    Ok(())
}

/// Atomically write `content` to `path` using write-then-rename.
///
/// 1. Creates the parent directory if needed
/// 2. Writes to a sibling temporary file and syncs it to disk
/// 3. Renames the temporary file over `path`
///
/// Readers see either the old content or the new content, never a partial
/// file. Permissions of an existing target are carried over.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), HelperError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let temp_path = temp_path_for(path);
    tracing::debug!("Writing {} bytes to {}", content.len(), temp_path.display());

    {
        let mut file =
            fs::File::create(&temp_path).map_err(|e| HelperError::io("writing", &temp_path, e))?;
        file.write_all(content).map_err(|e| HelperError::io("writing", &temp_path, e))?;
        file.sync_all().map_err(|e| HelperError::io("syncing", &temp_path, e))?;
    }

    if let Ok(metadata) = fs::metadata(path) {
        // best effort; the rename below still succeeds without it
        let _ = fs::set_permissions(&temp_path, metadata.permissions());
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(HelperError::io("writing", path, e));
    }

    Ok(())
}

/// Atomically write a string; see [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<(), HelperError> {
    atomic_write(path, content.as_bytes())
}

/// `gen.lock` → `gen.lock.tmp`, keeping the temp file next to its target.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
