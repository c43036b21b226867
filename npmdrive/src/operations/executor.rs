//! Plan execution engine.
//!
//! Executes a [`SetupPlan`] best-effort: every failure is caught at the
//! step boundary, recorded in the run report, and execution continues
//! with the remaining steps. There are no cross-step aborts; the caller
//! inspects the report to decide the exit status.

use serde::Serialize;

use crate::env::{EnvScope, EnvStore};
use crate::error::Result;
use crate::fsops::{ensure_dir, DirOutcome};
use crate::npm::NpmClient;
use crate::npmrc::apply_npmrc_edit;
use crate::pathlist::{PathReconciler, ReconcileOutcome};

use super::plan::{SetupAction, SetupPlan};

/// Name of the PATH-like variable being reconciled.
///
/// The persistent value under `HKCU\Environment` is named `Path`;
/// process-scope lookups on Windows are case-insensitive anyway.
pub const PATH_VAR: &str = "Path";

/// Outcome of a single executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// The step completed (possibly as a no-op).
    Ok,
    /// The step was intentionally not performed.
    Skipped,
    /// The step failed; the run continued without it.
    Failed,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Skipped => write!(f, "skip"),
            Self::Failed => write!(f, "fail"),
        }
    }
}

/// Report for one step of the run.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// What the step was.
    pub description: String,
    /// How it went.
    pub status: StepStatus,
    /// Optional extra detail (error message, backup path, ...).
    pub detail: Option<String>,
}

/// Report of a full plan execution.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Whether this was a dry-run (no changes made).
    pub dry_run: bool,
    /// Per-step outcomes, in plan order.
    pub steps: Vec<StepReport>,
    /// Warnings from planning and execution.
    pub warnings: Vec<String>,
}

impl RunReport {
    /// True when no step failed. Warnings do not affect success.
    #[must_use]
    pub fn success(&self) -> bool {
        !self
            .steps
            .iter()
            .any(|s| matches!(s.status, StepStatus::Failed))
    }
}

/// Executes setup plans against the environment, filesystem, and npm.
///
/// The executor can run in normal mode (applying changes) or dry-run
/// mode (reporting what would be done without touching anything).
///
/// # Examples
///
/// ```
/// use npmdrive::operations::{build_setup_plan, PlanExecutor};
/// use npmdrive::{Config, MemoryEnv, NpmClient};
///
/// let mut env = MemoryEnv::new();
/// let npm = NpmClient::new();
/// let plan = build_setup_plan(&Config::default(), false);
///
/// let report = PlanExecutor::new(&mut env, &npm).dry_run().execute(&plan);
/// assert!(report.dry_run);
/// assert!(report.success());
/// ```
pub struct PlanExecutor<'a> {
    env: &'a mut dyn EnvStore,
    npm: &'a NpmClient,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates an executor over the given environment store and npm client.
    pub fn new(env: &'a mut dyn EnvStore, npm: &'a NpmClient) -> Self {
        Self {
            env,
            npm,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode: no directory, file, variable,
    /// or npm changes are made.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the plan and returns the run report.
    ///
    /// Never returns an error: per-step failures are recorded as
    /// [`StepStatus::Failed`] entries in the report.
    pub fn execute(&mut self, plan: &SetupPlan) -> RunReport {
        if self.dry_run {
            return RunReport {
                dry_run: true,
                steps: plan
                    .actions
                    .iter()
                    .map(|action| StepReport {
                        description: action.description(),
                        status: StepStatus::Skipped,
                        detail: Some("dry-run".to_string()),
                    })
                    .collect(),
                warnings: plan.warnings.clone(),
            };
        }

        let mut warnings = plan.warnings.clone();
        let mut steps = Vec::new();

        for action in &plan.actions {
            let description = action.description();
            let step = match self.execute_action(action, &mut warnings) {
                Ok((status, detail)) => StepReport {
                    description,
                    status,
                    detail,
                },
                Err(e) => StepReport {
                    description,
                    status: StepStatus::Failed,
                    detail: Some(e.to_string()),
                },
            };
            steps.push(step);
        }

        RunReport {
            dry_run: false,
            steps,
            warnings,
        }
    }

    /// Executes a single action.
    fn execute_action(
        &mut self,
        action: &SetupAction,
        warnings: &mut Vec<String>,
    ) -> Result<(StepStatus, Option<String>)> {
        match action {
            SetupAction::CreateDirectory(path) => match ensure_dir(path)? {
                DirOutcome::Created => Ok((StepStatus::Ok, Some("created".to_string()))),
                DirOutcome::AlreadyExists => {
                    Ok((StepStatus::Ok, Some("already exists".to_string())))
                }
            },
            SetupAction::SetEnvVar { name, value } => {
                // The process-scope copy makes the change visible to the
                // rest of this run even if the persistent write fails.
                self.env.set(name, value, EnvScope::Process)?;
                if self.env.persistent_supported() {
                    self.env.set(name, value, EnvScope::User)?;
                    Ok((StepStatus::Ok, None))
                } else {
                    Ok((
                        StepStatus::Skipped,
                        Some("persistent scope requires Windows; process scope set".to_string()),
                    ))
                }
            }
            SetupAction::ReconcilePath { required, removals } => {
                self.reconcile_path(required, removals, warnings)
            }
            SetupAction::PatchNpmrc {
                path,
                prefix,
                cache,
            } => {
                let outcome = apply_npmrc_edit(path, prefix, cache)?;
                let detail = if outcome.created {
                    "created".to_string()
                } else if let Some(backup) = outcome.backup {
                    format!("updated; original saved to {}", backup.display())
                } else {
                    "already correct".to_string()
                };
                Ok((StepStatus::Ok, Some(detail)))
            }
            SetupAction::NpmConfigSet { key, value } => {
                match self.npm.config_set(key, value) {
                    Ok(()) => Ok((StepStatus::Ok, None)),
                    // The tool disappearing between planning and execution
                    // stays non-fatal.
                    Err(e) if e.is_tool_unavailable() => {
                        Ok((StepStatus::Skipped, Some(e.to_string())))
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// Reconciles PATH in the persistent scope (when supported) and in
    /// the current process.
    fn reconcile_path(
        &mut self,
        required: &[String],
        removals: &[String],
        warnings: &mut Vec<String>,
    ) -> Result<(StepStatus, Option<String>)> {
        let mut details = Vec::new();

        if self.env.persistent_supported() {
            let current = self
                .env
                .get(PATH_VAR, EnvScope::User)
                .unwrap_or_default();
            let outcome = PathReconciler::new(&*self.env).reconcile(&current, required, removals);
            report_repairs(&outcome, "user", warnings);
            if outcome.changed {
                self.env.set(PATH_VAR, &outcome.value, EnvScope::User)?;
                details.push(format!("user PATH updated ({} entries)", outcome.entries.len()));
            } else {
                details.push("user PATH already up to date".to_string());
            }
        } else {
            details.push("persistent PATH skipped (requires Windows)".to_string());
        }

        let current = self
            .env
            .get(PATH_VAR, EnvScope::Process)
            .unwrap_or_default();
        let outcome = PathReconciler::new(&*self.env).reconcile(&current, required, removals);
        report_repairs(&outcome, "process", warnings);
        if outcome.changed {
            self.env.set(PATH_VAR, &outcome.value, EnvScope::Process)?;
            details.push("process PATH updated".to_string());
        } else {
            details.push("process PATH already up to date".to_string());
        }

        Ok((StepStatus::Ok, Some(details.join("; "))))
    }
}

/// Records repaired (merged) tokens as warnings.
fn report_repairs(outcome: &ReconcileOutcome, scope: &str, warnings: &mut Vec<String>) {
    for token in &outcome.repaired {
        warnings.push(format!(
            "repaired merged {scope} PATH entry '{token}' (missing separator)"
        ));
    }
}
