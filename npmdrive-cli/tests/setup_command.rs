//! Integration tests for the setup, verify, and show-config commands.
//!
//! All tests point the configuration at a temporary directory and at a
//! nonexistent npm program, so they never touch the real machine or
//! depend on npm being installed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const NO_NPM: &str = "npmdrive-no-such-program";

fn npmdrive() -> Command {
    let mut cmd = Command::cargo_bin("npmdrive").expect("Failed to find npmdrive binary");
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

/// Writes a configuration file placing everything under the temp dir.
fn write_config(dir: &TempDir) -> PathBuf {
    let config = dir.path().join("npmdrive.yaml");
    let content = format!(
        "root: {}\nnpmrc: {}\n",
        dir.path().join("devdrive").display(),
        dir.path().join(".npmrc").display(),
    );
    std::fs::write(&config, content).expect("Failed to write config file");
    config
}

#[test]
fn test_setup_dry_run_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    npmdrive()
        .args(["--config", &config.display().to_string()])
        .args(["--npm", NO_NPM])
        .args(["setup", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("[skip]"));

    assert!(!dir.path().join("devdrive").exists());
    assert!(!dir.path().join(".npmrc").exists());
}

#[test]
fn test_setup_creates_directories_and_npmrc() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    npmdrive()
        .args(["--config", &config.display().to_string()])
        .args(["--npm", NO_NPM])
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup complete"))
        .stdout(predicate::str::contains("Verification passed"));

    assert!(dir.path().join("devdrive").join("npm").is_dir());
    assert!(dir.path().join("devdrive").join("npm-cache").is_dir());

    let npmrc = std::fs::read_to_string(dir.path().join(".npmrc")).unwrap();
    assert!(npmrc.contains("prefix="));
    assert!(npmrc.contains("cache="));
}

#[test]
fn test_setup_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    for _ in 0..2 {
        npmdrive()
            .args(["--config", &config.display().to_string()])
            .args(["--npm", NO_NPM])
            .arg("setup")
            .assert()
            .success();
    }

    // The second run found the file already correct: no backup exists.
    let backups = std::fs::read_dir(dir.path())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .contains(".bak.")
        })
        .count();
    assert_eq!(backups, 0);
}

#[test]
fn test_setup_json_report() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = npmdrive()
        .args(["--config", &config.display().to_string()])
        .args(["--npm", NO_NPM])
        .args(["setup", "--dry-run", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["run"]["dry_run"], serde_json::Value::Bool(true));
    assert!(report["run"]["steps"].as_array().unwrap().len() > 1);
    // A dry run has nothing to verify.
    assert!(report["verification"].is_null());
}

#[test]
fn test_setup_skip_verify() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    npmdrive()
        .args(["--config", &config.display().to_string()])
        .args(["--npm", NO_NPM])
        .args(["setup", "--skip-verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup complete"))
        .stdout(predicate::str::contains("Verification passed").not());
}

#[test]
fn test_setup_missing_npm_warns() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    npmdrive()
        .args(["--config", &config.display().to_string()])
        .args(["--npm", NO_NPM])
        .args(["setup", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("npm executable not found"));
}

#[test]
fn test_verify_fails_before_setup() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    npmdrive()
        .args(["--config", &config.display().to_string()])
        .args(["--npm", NO_NPM])
        .arg("verify")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("[fail]"))
        .stdout(predicate::str::contains("Verification failed"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    npmdrive()
        .args(["--config", "/no/such/npmdrive.yaml"])
        .args(["--npm", NO_NPM])
        .args(["setup", "--dry-run"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_show_config_resolves_defaults() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    npmdrive()
        .args(["--config", &config.display().to_string()])
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            dir.path().join("devdrive").join("npm").display().to_string(),
        ))
        .stdout(predicate::str::contains("npm-cache"));
}

#[test]
fn test_show_config_json_parses() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = npmdrive()
        .args(["--config", &config.display().to_string()])
        .args(["show-config", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let resolved: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(resolved["prefix"].as_str().unwrap().contains("npm"));
    assert!(resolved["npmrc"].as_str().unwrap().ends_with(".npmrc"));
}
