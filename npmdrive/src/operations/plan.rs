//! Plan types for the setup operation.
//!
//! A plan describes what the run will do without performing any of it,
//! so it can be inspected, logged, or printed in dry-run mode before
//! execution.

use std::path::PathBuf;

/// A single action to be taken during setup.
///
/// Each action corresponds to one externally visible side effect: a
/// directory creation, an environment-variable write, a PATH
/// reconciliation, a config-file patch, or an npm invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupAction {
    /// Create a directory (and missing parents) if absent.
    CreateDirectory(PathBuf),

    /// Set an environment variable in the persistent user store and in
    /// the current process.
    SetEnvVar {
        /// Variable name.
        name: String,
        /// Value to assign.
        value: String,
    },

    /// Reconcile the PATH variable in both scopes.
    ReconcilePath {
        /// Entries that must be present after reconciliation.
        required: Vec<String>,
        /// Entries to drop (compared by normalized key).
        removals: Vec<String>,
    },

    /// Patch the npm config file, backing up any existing copy.
    PatchNpmrc {
        /// Path of the config file.
        path: PathBuf,
        /// Value for the `prefix=` line.
        prefix: PathBuf,
        /// Value for the `cache=` line.
        cache: PathBuf,
    },

    /// Run `npm config set <key> <value>`.
    NpmConfigSet {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },
}

impl SetupAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateDirectory(path) => {
                format!("Create directory {}", path.display())
            }
            Self::SetEnvVar { name, value } => {
                format!("Set environment variable {name}={value}")
            }
            Self::ReconcilePath { required, .. } => {
                format!("Reconcile PATH with {} required entr{}", required.len(), {
                    if required.len() == 1 {
                        "y"
                    } else {
                        "ies"
                    }
                })
            }
            Self::PatchNpmrc { path, .. } => {
                format!("Update config file {}", path.display())
            }
            Self::NpmConfigSet { key, value } => {
                format!("Run npm config set {key} {value}")
            }
        }
    }
}

/// A complete setup plan: description, ordered actions, warnings.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use npmdrive::operations::{SetupAction, SetupPlan};
///
/// let plan = SetupPlan::new("Relocate npm")
///     .add_action(SetupAction::CreateDirectory(PathBuf::from("D:\\packages\\npm")))
///     .add_warning("npm not found; config steps skipped");
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan.warnings.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SetupPlan {
    /// A human-readable description of the run.
    pub description: String,

    /// The sequence of actions to perform, in order.
    pub actions: Vec<SetupAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl SetupPlan {
    /// Creates an empty plan with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: SetupAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
