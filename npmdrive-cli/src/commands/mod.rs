//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `setup`: Create the Dev Drive directories and point npm at them
//! - `verify`: Check that a previous setup is still in effect
//! - `show_config`: Print the resolved configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod setup;
pub mod show_config;
pub mod verify;

pub use completions::CompletionsCommand;
pub use setup::SetupCommand;
pub use show_config::ShowConfigCommand;
pub use verify::VerifyCommand;
