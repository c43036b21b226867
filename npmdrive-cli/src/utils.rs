//! Utility functions for CLI operations.
//!
//! Shared plumbing for the commands: configuration loading with the
//! global overrides applied, npm client construction, and report
//! formatting helpers.

use crate::error::CliError;
use clap::ValueEnum;
use npmdrive::operations::{RunReport, StepStatus, VerifyReport};
use npmdrive::{Config, ConfigBuilder, NpmClient};
use std::io::Write;
use std::path::PathBuf;

/// Output format shared by the reporting commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by init_logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file path.
    pub config: Option<PathBuf>,

    /// Program name or path used to invoke npm.
    pub npm: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_path(path);
    }

    if let Some(ref npm) = global.npm {
        builder = builder.with_config(Config {
            npm_program: Some(npm.clone()),
            ..Default::default()
        });
    }

    builder.build().map_err(CliError::from)
}

/// Builds the npm client for this run from the resolved configuration.
pub fn npm_client(config: &Config) -> NpmClient {
    match &config.npm_program {
        Some(program) => NpmClient::with_program(program.clone()),
        None => NpmClient::new(),
    }
}

/// Prints a run report to stdout in human-readable form.
pub fn print_run_report(report: &RunReport) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for step in &report.steps {
        match &step.detail {
            Some(detail) => writeln!(handle, "[{}] {} ({detail})", step.status, step.description)?,
            None => writeln!(handle, "[{}] {}", step.status, step.description)?,
        }
    }

    let failed = report
        .steps
        .iter()
        .filter(|s| s.status == StepStatus::Failed)
        .count();
    if report.dry_run {
        writeln!(handle, "Dry run: {} step(s) planned, nothing changed", report.steps.len())?;
    } else if failed == 0 {
        writeln!(handle, "Setup complete: {} step(s)", report.steps.len())?;
    } else {
        writeln!(handle, "Setup finished with {failed} failed step(s)")?;
    }

    Ok(())
}

/// Prints a verification report to stdout in human-readable form.
pub fn print_verify_report(report: &VerifyReport) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for check in &report.checks {
        match &check.detail {
            Some(detail) => {
                writeln!(handle, "[{}] {} ({detail})", check.status, check.description)?;
            }
            None => writeln!(handle, "[{}] {}", check.status, check.description)?,
        }
    }

    if report.success() {
        writeln!(handle, "Verification passed")?;
    } else {
        let failed = report
            .checks
            .iter()
            .filter(|c| c.status == StepStatus::Failed)
            .count();
        writeln!(handle, "Verification failed: {failed} check(s) did not pass")?;
    }

    Ok(())
}

/// Serializes a report as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npm_client_uses_configured_program() {
        let config = Config {
            npm_program: Some("/opt/node/bin/npm".to_string()),
            ..Default::default()
        };
        assert_eq!(npm_client(&config).program(), "/opt/node/bin/npm");
    }

    #[test]
    fn test_npm_client_default_program() {
        let config = Config::default();
        assert_eq!(npm_client(&config).program(), npmdrive::npm::default_program());
    }
}
