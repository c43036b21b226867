//! Setup command implementation.
//!
//! Builds the relocation plan from the resolved configuration, executes
//! it (or previews it with `--dry-run`), and verifies the result. Exit
//! code 1 signals that a step failed or verification did not pass;
//! individual failures never abort the remaining steps.

use crate::error::CliError;
use crate::utils::{
    load_configuration, npm_client, print_json, print_run_report, print_verify_report,
    GlobalOptions, ReportFormat,
};
use clap::Args;
use npmdrive::operations::{build_setup_plan, run_verification, PlanExecutor};
use npmdrive::{Logger, SystemEnv};

/// Create the Dev Drive directories and point npm at them.
#[derive(Args)]
pub struct SetupCommand {
    /// Show what would be done without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not run the verification pass after setup
    #[arg(long)]
    pub skip_verify: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: ReportFormat,
}

impl SetupCommand {
    /// Execute the setup command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        // 1. Resolve configuration
        let config = load_configuration(global)?;

        // 2. Probe for npm; absence downgrades the npm steps to a warning
        let npm = npm_client(&config);
        let npm_available = match npm.detect() {
            Ok(version) => {
                logger.info(&format!("found npm {version} via '{}'", npm.program()));
                true
            }
            Err(e) => {
                logger.debug(&format!("npm probe failed: {e}"));
                false
            }
        };

        // 3. Plan
        let plan = build_setup_plan(&config, npm_available);
        logger.info(&plan.description);

        // 4. Execute against the real environment
        let mut env = SystemEnv::new();
        let report = {
            let mut executor = PlanExecutor::new(&mut env, &npm);
            if self.dry_run {
                executor = executor.dry_run();
            }
            executor.execute(&plan)
        };

        for warning in &report.warnings {
            logger.warn(warning);
        }

        // 5. Verify, unless this was a preview or verification is off
        let verification = (!self.dry_run && !self.skip_verify)
            .then(|| run_verification(&config, &env, &npm));

        // 6. Report to stdout
        match self.format {
            ReportFormat::Human => {
                print_run_report(&report)?;
                if let Some(v) = &verification {
                    print_verify_report(v)?;
                }
            }
            ReportFormat::Json => {
                print_json(&serde_json::json!({
                    "run": report,
                    "verification": verification,
                }))?;
            }
        }

        if !report.success() {
            Err(CliError::SetupIncomplete(
                "one or more setup steps failed".to_string(),
            ))
        } else if verification.as_ref().is_some_and(|v| !v.success()) {
            Err(CliError::SetupIncomplete(
                "verification after setup found checks that did not pass".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
