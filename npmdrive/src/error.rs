//! Error types for the npmdrive library.
//!
//! This module provides the error hierarchy for all operations in the
//! npmdrive library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an npmdrive error.
///
/// # Examples
///
/// ```
/// use npmdrive::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("D:\\packages\\npm".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the npmdrive library.
///
/// This enum encompasses every failure class the setup run can hit.
/// Individual setup steps catch these at the step boundary and record
/// them in the run report rather than aborting the whole run.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// The package-manager executable could not be found.
    ///
    /// This is a non-fatal condition: steps that depend on the tool are
    /// skipped with a warning.
    #[error("'{program}' executable not found on PATH")]
    ToolUnavailable {
        /// The program that could not be found.
        program: String,
    },

    /// The package-manager executable ran but reported failure.
    #[error("'{program}' exited with status {status}: {stderr}")]
    ToolFailed {
        /// The program that failed.
        program: String,
        /// The exit status (or -1 if terminated by signal).
        status: i32,
        /// Captured standard error output.
        stderr: String,
    },

    /// A directory or file write failed.
    #[error("filesystem failure at {}: {reason}", path.display())]
    FilesystemFailure {
        /// The path the operation targeted.
        path: PathBuf,
        /// The reason the operation failed.
        reason: String,
    },

    /// A persistent environment-variable write failed.
    #[error("failed to write environment variable '{name}': {reason}")]
    EnvWrite {
        /// The variable that could not be written.
        name: String,
        /// The reason the write failed.
        reason: String,
    },
}

impl Error {
    /// Check if the error indicates the package-manager tool is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use npmdrive::Error;
    ///
    /// let err = Error::ToolUnavailable { program: "npm".to_string() };
    /// assert!(err.is_tool_unavailable());
    /// ```
    #[must_use]
    pub fn is_tool_unavailable(&self) -> bool {
        matches!(self, Self::ToolUnavailable { .. })
    }

    /// Check if the error is a persistent environment-variable write failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use npmdrive::Error;
    ///
    /// let err = Error::EnvWrite {
    ///     name: "PATH".to_string(),
    ///     reason: "access denied".to_string(),
    /// };
    /// assert!(err.is_env_write());
    /// ```
    #[must_use]
    pub fn is_env_write(&self) -> bool {
        matches!(self, Self::EnvWrite { .. })
    }
}
