//! Normalization of a single PATH entry.
//!
//! Equality between entries is decided by a normalized key; the raw
//! user-authored string is what gets persisted. Normalization:
//!
//! 1. expand embedded `%VAR%` references to their current values
//! 2. trim leading/trailing whitespace
//! 3. convert forward slashes to backslashes
//! 4. strip a single trailing separator, except for the bare separator
//!    or a bare drive root (`C:\`)
//! 5. lowercase (case-insensitive filesystem semantics)

use crate::env::{EnvScope, EnvStore};

use super::DIR_SEPARATOR;

/// One directory reference as it appears in a PATH-like variable.
///
/// Immutable value type: `raw` is the string as stored, `key` the
/// normalized form used purely for equality and deduplication.
///
/// # Examples
///
/// ```
/// use npmdrive::pathlist::PathEntry;
/// use npmdrive::MemoryEnv;
///
/// let env = MemoryEnv::new();
/// let entry = PathEntry::new("D:/Packages/Npm/", &env);
/// assert_eq!(entry.raw(), "D:/Packages/Npm/");
/// assert_eq!(entry.key(), "d:\\packages\\npm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    raw: String,
    key: String,
}

impl PathEntry {
    /// Creates an entry from its raw string, deriving the normalized key.
    ///
    /// `%VAR%` references are expanded against the process scope of `env`.
    #[must_use]
    pub fn new(raw: impl Into<String>, env: &dyn EnvStore) -> Self {
        let raw = raw.into();
        let key = normalize(&raw, env);
        Self { raw, key }
    }

    /// The string as it appears (and is persisted) in the PATH value.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized key used for equality comparison.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Expands `%VAR%` references in `raw` against the process scope of `env`.
///
/// Unknown variables (and unmatched `%` signs) are left literal, which
/// matches how the shell leaves unexpandable references alone.
///
/// # Examples
///
/// ```
/// use npmdrive::pathlist::expand_vars;
/// use npmdrive::MemoryEnv;
///
/// let env = MemoryEnv::with_process_vars([("APPDATA", "C:\\Users\\dev\\AppData\\Roaming")]);
/// assert_eq!(
///     expand_vars("%APPDATA%\\npm", &env),
///     "C:\\Users\\dev\\AppData\\Roaming\\npm"
/// );
/// assert_eq!(expand_vars("%UNSET%\\npm", &env), "%UNSET%\\npm");
/// ```
#[must_use]
pub fn expand_vars(raw: &str, env: &dyn EnvStore) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('%') {
            Some(end) => {
                let name = &after[..end];
                match env.get(name, EnvScope::Process) {
                    Some(value) if !name.is_empty() => {
                        out.push_str(&value);
                    }
                    _ => {
                        // Unknown reference stays literal.
                        out.push('%');
                        out.push_str(name);
                        out.push('%');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                // Lone '%' with no closing partner.
                out.push('%');
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Derives the normalized comparison key for a raw PATH entry.
///
/// # Examples
///
/// ```
/// use npmdrive::pathlist::normalize;
/// use npmdrive::MemoryEnv;
///
/// let env = MemoryEnv::new();
/// assert_eq!(normalize("  C:/Tools/Node/  ", &env), "c:\\tools\\node");
/// // A bare drive root keeps its trailing separator.
/// assert_eq!(normalize("D:\\", &env), "d:\\");
/// ```
#[must_use]
pub fn normalize(raw: &str, env: &dyn EnvStore) -> String {
    let expanded = expand_vars(raw, env);
    let mut s: String = expanded.trim().replace('/', "\\");

    if s.ends_with(DIR_SEPARATOR) && s != "\\" && !is_drive_root(&s) {
        s.pop();
    }

    s.to_lowercase()
}

/// Whether `s` is a bare drive root such as `C:\`.
fn is_drive_root(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'\\'
}
