//! Environment-variable store abstraction.
//!
//! The setup run reads and writes two kinds of environment variables:
//! process-scope (the current run's environment block) and user-persistent
//! (surviving across sessions). This module defines the [`EnvStore`] trait
//! over both scopes, the real [`SystemEnv`] implementation, and an
//! in-memory [`MemoryEnv`] so the operation layer can be tested without
//! touching the real OS store.

mod memory;
mod system;

pub use memory::MemoryEnv;
pub use system::SystemEnv;

use std::fmt;

use crate::error::Result;

/// Scope of an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvScope {
    /// The current process's environment block. Lost when the process exits.
    Process,
    /// The user-persistent store (on Windows, `HKCU\Environment`).
    User,
}

impl fmt::Display for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process => write!(f, "process"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Read/write access to environment variables in a given scope.
///
/// The read-modify-write sequence on a variable is best-effort, not
/// transactional: a concurrent writer can race with it. That is accepted
/// for this tool's interactive, single-user profile.
///
/// # Examples
///
/// ```
/// use npmdrive::{EnvScope, EnvStore, MemoryEnv};
///
/// let mut env = MemoryEnv::new();
/// env.set("NPM_CONFIG_PREFIX", "D:\\packages\\npm", EnvScope::User).unwrap();
/// assert_eq!(
///     env.get("NPM_CONFIG_PREFIX", EnvScope::User).as_deref(),
///     Some("D:\\packages\\npm")
/// );
/// ```
pub trait EnvStore {
    /// Reads a variable, returning `None` when it is absent or when the
    /// stored value is not representable as a string.
    fn get(&self, name: &str, scope: EnvScope) -> Option<String>;

    /// Writes a variable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EnvWrite`] when the store rejects the write,
    /// including when the persistent scope is not supported on this platform.
    fn set(&mut self, name: &str, value: &str, scope: EnvScope) -> Result<()>;

    /// Whether the user-persistent scope is backed by a real store.
    ///
    /// `false` on platforms without a registry-backed user environment;
    /// callers should then skip persistent-scope steps rather than fail them.
    fn persistent_supported(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_display() {
        assert_eq!(format!("{}", EnvScope::Process), "process");
        assert_eq!(format!("{}", EnvScope::User), "user");
    }
}
