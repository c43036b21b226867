//! Filesystem helpers for the setup run.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Outcome of [`ensure_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    /// The directory was created (including any missing parents).
    Created,
    /// The directory already existed.
    AlreadyExists,
}

/// Creates a directory (and parents) if it does not exist. Idempotent.
///
/// # Errors
///
/// Returns [`Error::FilesystemFailure`] when the path exists but is not
/// a directory, or when creation fails.
///
/// # Examples
///
/// ```
/// use npmdrive::fsops::{ensure_dir, DirOutcome};
///
/// let dir = tempfile::tempdir().unwrap();
/// let target = dir.path().join("npm-cache");
/// assert_eq!(ensure_dir(&target).unwrap(), DirOutcome::Created);
/// assert_eq!(ensure_dir(&target).unwrap(), DirOutcome::AlreadyExists);
/// ```
pub fn ensure_dir(path: &Path) -> Result<DirOutcome> {
    if path.exists() {
        if path.is_dir() {
            return Ok(DirOutcome::AlreadyExists);
        }
        return Err(Error::FilesystemFailure {
            path: path.to_path_buf(),
            reason: "exists but is not a directory".to_string(),
        });
    }

    fs::create_dir_all(path).map_err(|e| Error::FilesystemFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(DirOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a").join("b").join("c");
        assert_eq!(ensure_dir(&target).unwrap(), DirOutcome::Created);
        assert!(target.is_dir());
    }

    #[test]
    fn test_existing_directory_reported() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ensure_dir(dir.path()).unwrap(), DirOutcome::AlreadyExists);
    }

    #[test]
    fn test_file_in_the_way_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("blocker");
        fs::write(&file, "x").unwrap();

        let err = ensure_dir(&file).unwrap_err();
        assert!(format!("{err}").contains("not a directory"));
    }
}
