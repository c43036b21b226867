//! The real OS-backed environment store.

use std::env;

use super::{EnvScope, EnvStore};
use crate::error::{Error, Result};

/// [`EnvStore`] implementation over the real OS environment.
///
/// Process scope reads and writes the current process's environment block
/// via `std::env`. User scope reads and writes the persistent per-user
/// store: on Windows this is the `Environment` key under
/// `HKEY_CURRENT_USER`; on other platforms the scope is reported as
/// unsupported and writes fail with [`Error::EnvWrite`].
///
/// No locking is performed against concurrent writers of the persistent
/// store.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl SystemEnv {
    /// Creates a system environment store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EnvStore for SystemEnv {
    fn get(&self, name: &str, scope: EnvScope) -> Option<String> {
        match scope {
            EnvScope::Process => env::var(name).ok(),
            EnvScope::User => user_get(name),
        }
    }

    fn set(&mut self, name: &str, value: &str, scope: EnvScope) -> Result<()> {
        match scope {
            EnvScope::Process => {
                env::set_var(name, value);
                Ok(())
            }
            EnvScope::User => user_set(name, value),
        }
    }

    fn persistent_supported(&self) -> bool {
        cfg!(windows)
    }
}

#[cfg(windows)]
fn user_get(name: &str) -> Option<String> {
    use winreg::enums::{HKEY_CURRENT_USER, KEY_READ};
    use winreg::RegKey;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey_with_flags("Environment", KEY_READ)
        .ok()?;
    // Non-string value types read back as an error and count as absent.
    key.get_value::<String, _>(name).ok()
}

#[cfg(windows)]
fn user_set(name: &str, value: &str) -> Result<()> {
    use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE};
    use winreg::RegKey;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey_with_flags("Environment", KEY_SET_VALUE)
        .map_err(|e| Error::EnvWrite {
            name: name.to_string(),
            reason: format!("cannot open HKCU\\Environment: {e}"),
        })?;
    key.set_value(name, &value.to_string())
        .map_err(|e| Error::EnvWrite {
            name: name.to_string(),
            reason: format!("registry write failed: {e}"),
        })
}

#[cfg(not(windows))]
fn user_get(_name: &str) -> Option<String> {
    None
}

#[cfg(not(windows))]
fn user_set(name: &str, _value: &str) -> Result<()> {
    Err(Error::EnvWrite {
        name: name.to_string(),
        reason: "persistent user-scope variables require Windows".to_string(),
    })
}
