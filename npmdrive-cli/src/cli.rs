//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, SetupCommand, ShowConfigCommand, VerifyCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for putting npm's global directories on a Dev Drive.
#[derive(Parser)]
#[command(name = "npmdrive")]
#[command(version, about = "Relocate npm's prefix and cache onto a Dev Drive", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use an explicit configuration file instead of ~/.npmdrive.yaml
    #[arg(long, value_name = "PATH", global = true, env = "NPMDRIVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Program name or path used to invoke npm
    #[arg(long, value_name = "PROGRAM", global = true, env = "NPMDRIVE_NPM")]
    pub npm: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the Dev Drive directories and point npm at them
    Setup(SetupCommand),

    /// Check that a previous setup is still in effect
    Verify(VerifyCommand),

    /// Print the resolved configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
