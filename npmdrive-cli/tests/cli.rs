//! Integration tests for the npmdrive CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn npmdrive() -> Command {
    let mut cmd = Command::cargo_bin("npmdrive").expect("Failed to find npmdrive binary");
    // Keep the host environment from leaking into configuration.
    for var in [
        "NPMDRIVE_CONFIG",
        "NPMDRIVE_LOG_MODE",
        "NPMDRIVE_ROOT",
        "NPMDRIVE_PREFIX",
        "NPMDRIVE_CACHE",
        "NPMDRIVE_BIN",
        "NPMDRIVE_NPMRC",
        "NPMDRIVE_NPM",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    // With clap subcommands required, no arguments should fail and show usage
    npmdrive()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    npmdrive()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("npmdrive"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    npmdrive()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Relocate npm's prefix and cache onto a Dev Drive",
        ));
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    npmdrive()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test completion script generation.
#[test]
fn test_cli_completions_bash() {
    npmdrive()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npmdrive"));
}

/// Test that an unknown shell name is rejected.
#[test]
fn test_cli_completions_invalid_shell() {
    npmdrive()
        .args(["completions", "nosuchshell"])
        .assert()
        .failure();
}
