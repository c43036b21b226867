//! Post-setup verification.
//!
//! Re-inspects the machine and reports whether every effect of a setup
//! run is in place: directories on disk, persistent variables, PATH
//! membership, config-file lines, and npm's own view of its settings.
//! Verification never mutates anything.

use serde::Serialize;

use crate::config::Config;
use crate::env::{EnvScope, EnvStore};
use crate::npm::NpmClient;
use crate::npmrc::read_managed_values;
use crate::pathlist::{normalize, PathReconciler, LIST_SEPARATOR};

use super::executor::{StepStatus, PATH_VAR};
use super::setup::{CACHE_VAR_NAMES, PREFIX_VAR_NAMES};

/// Outcome of one verification check.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyCheck {
    /// What was checked.
    pub description: String,
    /// Result of the check.
    pub status: StepStatus,
    /// Expected/actual detail for mismatches, or a skip reason.
    pub detail: Option<String>,
}

/// Full verification report.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Individual checks, in a stable order.
    pub checks: Vec<VerifyCheck>,
}

impl VerifyReport {
    /// True when no check failed. Skipped checks do not count as failures.
    #[must_use]
    pub fn success(&self) -> bool {
        !self
            .checks
            .iter()
            .any(|c| matches!(c.status, StepStatus::Failed))
    }

    fn push(&mut self, description: impl Into<String>, status: StepStatus, detail: Option<String>) {
        self.checks.push(VerifyCheck {
            description: description.into(),
            status,
            detail,
        });
    }
}

/// Verifies the machine against `config`.
///
/// Checks that cannot be performed on this platform (persistent
/// variables off Windows) or without npm are reported as
/// [`StepStatus::Skipped`] rather than failed.
#[must_use]
pub fn run_verification(config: &Config, env: &dyn EnvStore, npm: &NpmClient) -> VerifyReport {
    let mut report = VerifyReport { checks: Vec::new() };
    let prefix = config.prefix().display().to_string();
    let cache = config.cache().display().to_string();

    for dir in [config.prefix(), config.cache(), config.bin()] {
        let description = format!("Directory {} exists", dir.display());
        if dir.is_dir() {
            report.push(description, StepStatus::Ok, None);
        } else {
            report.push(description, StepStatus::Failed, Some("not found".to_string()));
        }
    }

    let persist = env.persistent_supported();
    for (names, expected) in [(PREFIX_VAR_NAMES, &prefix), (CACHE_VAR_NAMES, &cache)] {
        for name in names {
            let description = format!("Persistent variable {name} is set");
            if persist {
                check_value(&mut report, description, env.get(name, EnvScope::User), expected);
            } else {
                report.push(
                    description,
                    StepStatus::Skipped,
                    Some("persistent scope requires Windows".to_string()),
                );
            }
        }
    }

    check_path_membership(&mut report, config, env, persist);
    check_npmrc(&mut report, config, &prefix, &cache);
    check_npm_view(&mut report, npm, &prefix, &cache);

    report
}

fn check_value(
    report: &mut VerifyReport,
    description: String,
    actual: Option<String>,
    expected: &str,
) {
    match actual {
        Some(value) if value == expected => report.push(description, StepStatus::Ok, None),
        Some(value) => report.push(
            description,
            StepStatus::Failed,
            Some(format!("expected '{expected}', found '{value}'")),
        ),
        None => report.push(description, StepStatus::Failed, Some("not set".to_string())),
    }
}

/// Checks that the bin directory is on PATH in each applicable scope,
/// comparing entries by normalized key.
fn check_path_membership(
    report: &mut VerifyReport,
    config: &Config,
    env: &dyn EnvStore,
    persist: bool,
) {
    let reconciler = PathReconciler::new(env);
    let bin_key = reconciler.normalize(&config.bin().display().to_string());

    let scopes: &[EnvScope] = if persist {
        &[EnvScope::User, EnvScope::Process]
    } else {
        &[EnvScope::Process]
    };
    if !persist {
        report.push(
            format!("{} is on the user PATH", config.bin().display()),
            StepStatus::Skipped,
            Some("persistent scope requires Windows".to_string()),
        );
    }

    for scope in scopes {
        let description = format!("{} is on the {scope} PATH", config.bin().display());
        let value = env.get(PATH_VAR, *scope).unwrap_or_default();
        let present = value
            .split(LIST_SEPARATOR)
            .any(|token| reconciler.normalize(token) == bin_key);
        if present {
            report.push(description, StepStatus::Ok, None);
        } else {
            report.push(description, StepStatus::Failed, Some("entry missing".to_string()));
        }
    }
}

/// Checks the `prefix=` and `cache=` lines of the config file.
fn check_npmrc(report: &mut VerifyReport, config: &Config, prefix: &str, cache: &str) {
    let path = config.npmrc();
    let description = format!("{} holds the managed keys", path.display());

    match read_managed_values(&path) {
        Ok(Some((found_prefix, found_cache))) => {
            let prefix_ok = found_prefix.as_deref() == Some(prefix);
            let cache_ok = found_cache.as_deref() == Some(cache);
            if prefix_ok && cache_ok {
                report.push(description, StepStatus::Ok, None);
            } else {
                report.push(
                    description,
                    StepStatus::Failed,
                    Some(format!(
                        "prefix={}, cache={}",
                        found_prefix.as_deref().unwrap_or("<unset>"),
                        found_cache.as_deref().unwrap_or("<unset>")
                    )),
                );
            }
        }
        Ok(None) => report.push(description, StepStatus::Failed, Some("file not found".to_string())),
        Err(e) => report.push(description, StepStatus::Failed, Some(e.to_string())),
    }
}

/// Compares npm's effective settings with the expected values.
///
/// Values are compared by normalized path key since npm may echo a
/// different separator or casing than was written.
fn check_npm_view(report: &mut VerifyReport, npm: &NpmClient, prefix: &str, cache: &str) {
    for (key, expected) in [("prefix", prefix), ("cache", cache)] {
        let description = format!("npm config get {key} matches");
        match npm.config_get(key) {
            Ok(actual) if path_keys_equal(&actual, expected) => {
                report.push(description, StepStatus::Ok, None);
            }
            Ok(actual) => report.push(
                description,
                StepStatus::Failed,
                Some(format!("expected '{expected}', npm reports '{actual}'")),
            ),
            Err(e) if e.is_tool_unavailable() => {
                report.push(description, StepStatus::Skipped, Some(e.to_string()));
            }
            Err(e) => report.push(description, StepStatus::Failed, Some(e.to_string())),
        }
    }
}

fn path_keys_equal(a: &str, b: &str) -> bool {
    let env = crate::env::MemoryEnv::new();
    normalize(a, &env) == normalize(b, &env)
}
