//! Line-oriented editor for the npm per-user config file (`.npmrc`).
//!
//! The file is a `key=value` list. The editor rewrites the lines for the
//! keys it manages (`prefix`, `cache`), preserves everything else
//! verbatim, appends managed keys that are missing, and backs the
//! original up to a timestamped sibling before any rewrite of an
//! existing file. When the content is already correct, nothing is
//! written and no backup is made.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// What an [`apply_npmrc_edit`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmrcOutcome {
    /// The file did not exist and was created.
    pub created: bool,
    /// The file content was written (false when already correct).
    pub changed: bool,
    /// Path of the backup copy, when one was made.
    pub backup: Option<PathBuf>,
}

/// Sets the managed `prefix=` and `cache=` keys in the config file.
///
/// # Errors
///
/// Returns [`Error::FilesystemFailure`] when the file or its backup
/// cannot be written; the caller records this and continues with the
/// remaining steps.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use npmdrive::npmrc::apply_npmrc_edit;
///
/// let outcome = apply_npmrc_edit(
///     Path::new("C:\\Users\\dev\\.npmrc"),
///     Path::new("D:\\packages\\npm"),
///     Path::new("D:\\packages\\npm-cache"),
/// ).unwrap();
/// if let Some(backup) = outcome.backup {
///     println!("previous config saved to {}", backup.display());
/// }
/// ```
pub fn apply_npmrc_edit(path: &Path, prefix: &Path, cache: &Path) -> Result<NpmrcOutcome> {
    let managed = [
        ("prefix", prefix.display().to_string()),
        ("cache", cache.display().to_string()),
    ];

    if !path.exists() {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| fs_failure(parent, &e))?;
            }
        }
        let content: String = managed
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect();
        fs::write(path, content).map_err(|e| fs_failure(path, &e))?;
        return Ok(NpmrcOutcome {
            created: true,
            changed: true,
            backup: None,
        });
    }

    let original = fs::read_to_string(path).map_err(|e| fs_failure(path, &e))?;
    let rewritten = rewrite(&original, &managed);

    if rewritten == original {
        return Ok(NpmrcOutcome {
            created: false,
            changed: false,
            backup: None,
        });
    }

    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| fs_failure(&backup, &e))?;
    fs::write(path, rewritten).map_err(|e| fs_failure(path, &e))?;

    Ok(NpmrcOutcome {
        created: false,
        changed: true,
        backup: Some(backup),
    })
}

/// Reads the effective values of the managed `prefix` and `cache` keys.
///
/// Returns `Ok(None)` when the file does not exist. For each key the
/// first non-comment assignment wins, matching how the rewrite collapses
/// duplicates.
///
/// # Errors
///
/// Returns [`Error::FilesystemFailure`] when the file exists but cannot
/// be read.
pub fn read_managed_values(path: &Path) -> Result<Option<(Option<String>, Option<String>)>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| fs_failure(path, &e))?;

    let mut prefix = None;
    let mut cache = None;
    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            match key.trim() {
                "prefix" if prefix.is_none() => prefix = Some(value.trim().to_string()),
                "cache" if cache.is_none() => cache = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }
    Ok(Some((prefix, cache)))
}

/// Rewrites managed keys in `original`, preserving everything else.
fn rewrite(original: &str, managed: &[(&str, String)]) -> String {
    let mut seen = vec![false; managed.len()];
    let mut lines: Vec<String> = Vec::new();

    for line in original.lines() {
        let trimmed = line.trim_start();
        let is_comment = trimmed.starts_with('#') || trimmed.starts_with(';');
        let key = (!is_comment)
            .then(|| line.split_once('='))
            .flatten()
            .map(|(k, _)| k.trim());

        match key.and_then(|k| managed.iter().position(|(name, _)| *name == k)) {
            Some(idx) if !seen[idx] => {
                seen[idx] = true;
                let (name, value) = &managed[idx];
                lines.push(format!("{name}={value}"));
            }
            // A repeated managed key is dropped; npm only honors one.
            Some(_) => {}
            None => lines.push(line.to_string()),
        }
    }

    for (idx, (name, value)) in managed.iter().enumerate() {
        if !seen[idx] {
            lines.push(format!("{name}={value}"));
        }
    }

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Timestamped sibling path: `<file>.bak.<YYYYMMDDHHMMSS>`.
fn backup_path(path: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(&format!(".bak.{stamp}"));
    path.with_file_name(name)
}

fn fs_failure(path: &Path, err: &std::io::Error) -> Error {
    Error::FilesystemFailure {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
