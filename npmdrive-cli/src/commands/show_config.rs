//! Show-config command implementation.
//!
//! Prints the fully resolved configuration, with the defaults derived
//! from the Dev Drive root filled in.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions, ReportFormat};
use clap::Args;
use npmdrive::npm::default_program;
use npmdrive::Logger;
use std::io::Write;

/// Print the resolved configuration.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: ReportFormat,
}

impl ShowConfigCommand {
    /// Execute the show-config command.
    pub fn execute(self, global: &GlobalOptions, _logger: &Logger) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        // Resolved view: every accessor applied, no optional fields left.
        let resolved = serde_json::json!({
            "root": config.root().display().to_string(),
            "prefix": config.prefix().display().to_string(),
            "cache": config.cache().display().to_string(),
            "bin": config.bin().display().to_string(),
            "npmrc": config.npmrc().display().to_string(),
            "npm_program": config
                .npm_program
                .clone()
                .unwrap_or_else(|| default_program().to_string()),
        });

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            ReportFormat::Human => {
                // key: value lines, same syntax the configuration file uses
                let yaml = serde_yaml::to_string(&resolved)
                    .map_err(|e| CliError::Config(e.to_string()))?;
                write!(handle, "{yaml}")?;
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &resolved)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
