//! Verify command implementation.
//!
//! Re-checks every effect of a setup run without changing anything.
//! Exit code 1 means at least one check failed; checks that cannot run
//! on this platform or without npm are skipped, not failed.

use crate::error::CliError;
use crate::utils::{
    load_configuration, npm_client, print_json, print_verify_report, GlobalOptions, ReportFormat,
};
use clap::Args;
use npmdrive::operations::run_verification;
use npmdrive::{Logger, SystemEnv};

/// Check that a previous setup is still in effect.
#[derive(Args)]
pub struct VerifyCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: ReportFormat,
}

impl VerifyCommand {
    /// Execute the verify command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let npm = npm_client(&config);
        logger.info(&format!(
            "verifying npm relocation under {}",
            config.root().display()
        ));

        let env = SystemEnv::new();
        let report = run_verification(&config, &env, &npm);

        match self.format {
            ReportFormat::Human => print_verify_report(&report)?,
            ReportFormat::Json => print_json(&report)?,
        }

        if report.success() {
            Ok(())
        } else {
            Err(CliError::SetupIncomplete(
                "verification found checks that did not pass".to_string(),
            ))
        }
    }
}
