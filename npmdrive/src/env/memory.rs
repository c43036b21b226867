//! In-memory environment store for tests.

use std::collections::HashMap;

use super::{EnvScope, EnvStore};
use crate::error::Result;

/// An in-memory [`EnvStore`] backed by two hash maps.
///
/// Used by unit tests and anywhere the real OS store must not be touched.
/// Both scopes always succeed.
///
/// # Examples
///
/// ```
/// use npmdrive::{EnvScope, EnvStore, MemoryEnv};
///
/// let mut env = MemoryEnv::new();
/// assert!(env.get("PATH", EnvScope::User).is_none());
///
/// env.set("PATH", "C:\\bin", EnvScope::User).unwrap();
/// assert_eq!(env.get("PATH", EnvScope::User).as_deref(), Some("C:\\bin"));
/// // Scopes are independent.
/// assert!(env.get("PATH", EnvScope::Process).is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryEnv {
    process: HashMap<String, String>,
    user: HashMap<String, String>,
}

impl MemoryEnv {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with process-scope variables.
    ///
    /// Convenient for tests that exercise `%VAR%` expansion.
    #[must_use]
    pub fn with_process_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::new();
        for (k, v) in vars {
            env.process.insert(k.into(), v.into());
        }
        env
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, name: &str, scope: EnvScope) -> Option<String> {
        match scope {
            EnvScope::Process => self.process.get(name).cloned(),
            EnvScope::User => self.user.get(name).cloned(),
        }
    }

    fn set(&mut self, name: &str, value: &str, scope: EnvScope) -> Result<()> {
        let map = match scope {
            EnvScope::Process => &mut self.process,
            EnvScope::User => &mut self.user,
        };
        map.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
