//! Subprocess client for the npm command-line tool.
//!
//! Absence of the tool is a non-fatal condition: callers probe with
//! [`NpmClient::detect`] and skip npm-dependent steps with a warning when
//! it fails. Calls are blocking with no timeout.

use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Default npm program name for the host platform.
///
/// On Windows npm ships as a `.cmd` shim, which `Command::new` does not
/// resolve from a bare `npm`.
#[must_use]
pub fn default_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Invokes the npm executable and captures its output.
///
/// # Examples
///
/// ```no_run
/// use npmdrive::NpmClient;
///
/// let npm = NpmClient::new();
/// match npm.detect() {
///     Ok(version) => println!("npm {version}"),
///     Err(e) => eprintln!("skipping npm steps: {e}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NpmClient {
    program: String,
}

impl Default for NpmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NpmClient {
    /// Creates a client using the platform default program name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: default_program().to_string(),
        }
    }

    /// Creates a client invoking a specific program (path or name).
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this client invokes.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Probes for the tool by running `--version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolUnavailable`] when the program cannot be
    /// spawned, or [`Error::ToolFailed`] when it exits non-zero.
    pub fn detect(&self) -> Result<String> {
        self.run(&["--version"])
    }

    /// Reads a configuration value via `npm config get <key>`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NpmClient::detect`].
    pub fn config_get(&self, key: &str) -> Result<String> {
        self.run(&["config", "get", key])
    }

    /// Writes a configuration value via `npm config set <key> <value>`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NpmClient::detect`].
    pub fn config_set(&self, key: &str, value: &str) -> Result<()> {
        self.run(&["config", "set", key, value]).map(|_| ())
    }

    /// Runs the tool with the given arguments, returning trimmed stdout.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ToolUnavailable {
                        program: self.program.clone(),
                    }
                } else {
                    Error::Io(e)
                }
            })?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                program: self.program.clone(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_per_platform() {
        if cfg!(windows) {
            assert_eq!(default_program(), "npm.cmd");
        } else {
            assert_eq!(default_program(), "npm");
        }
    }

    #[test]
    fn test_with_program() {
        let npm = NpmClient::with_program("/opt/node/bin/npm");
        assert_eq!(npm.program(), "/opt/node/bin/npm");
    }

    #[test]
    fn test_missing_program_maps_to_tool_unavailable() {
        let npm = NpmClient::with_program("npmdrive-no-such-program");
        let err = npm.detect().unwrap_err();
        assert!(err.is_tool_unavailable());
    }

    #[test]
    fn test_config_get_with_missing_program() {
        let npm = NpmClient::with_program("npmdrive-no-such-program");
        assert!(npm.config_get("prefix").is_err());
    }
}
