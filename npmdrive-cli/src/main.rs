//! Main entry point for the npmdrive CLI.
//!
//! Relocates npm's global prefix, cache, and bin directory onto a Dev
//! Drive and keeps environment variables, PATH, and `.npmrc` in sync.
//! Commands:
//! - `setup`: Apply (or preview) the relocation
//! - `verify`: Check that a previous setup is still intact
//! - `show-config`: Print the resolved configuration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    // Map argument errors to exit code 4; help and version stay 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                CliError::InvalidArguments(e.to_string()).exit_code()
            } else {
                0
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let logger = npmdrive::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        npm: cli.npm,
    };

    let result = match cli.command {
        cli::Command::Setup(cmd) => cmd.execute(&global, &logger),
        cli::Command::Verify(cmd) => cmd.execute(&global, &logger),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global, &logger),
        cli::Command::Completions(cmd) => cmd.execute(&global, &logger),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
