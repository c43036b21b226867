//! Environment variable overrides for configuration.
//!
//! `NPMDRIVE_*` variables override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use npmdrive::config::EnvironmentConfig;
/// use npmdrive::Config;
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies `NPMDRIVE_*` overrides to `config`.
    ///
    /// Recognized variables: `NPMDRIVE_ROOT`, `NPMDRIVE_PREFIX`,
    /// `NPMDRIVE_CACHE`, `NPMDRIVE_BIN`, `NPMDRIVE_NPMRC`,
    /// `NPMDRIVE_NPM`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an empty value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(path) = Self::path_var("NPMDRIVE_ROOT")? {
            config.root = Some(path);
        }
        if let Some(path) = Self::path_var("NPMDRIVE_PREFIX")? {
            config.prefix = Some(path);
        }
        if let Some(path) = Self::path_var("NPMDRIVE_CACHE")? {
            config.cache = Some(path);
        }
        if let Some(path) = Self::path_var("NPMDRIVE_BIN")? {
            config.bin = Some(path);
        }
        if let Some(path) = Self::path_var("NPMDRIVE_NPMRC")? {
            config.npmrc = Some(path);
        }
        if let Ok(program) = env::var("NPMDRIVE_NPM") {
            if program.trim().is_empty() {
                return Err(Error::Validation {
                    field: "NPMDRIVE_NPM".into(),
                    message: "must not be empty".into(),
                });
            }
            config.npm_program = Some(program);
        }

        Ok(())
    }

    /// Reads a path-valued variable, rejecting empty values.
    fn path_var(name: &str) -> Result<Option<PathBuf>> {
        match env::var(name) {
            Ok(value) if value.trim().is_empty() => Err(Error::Validation {
                field: name.into(),
                message: "must not be empty".into(),
            }),
            Ok(value) => Ok(Some(PathBuf::from(value))),
            Err(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_all() {
        for name in [
            "NPMDRIVE_ROOT",
            "NPMDRIVE_PREFIX",
            "NPMDRIVE_CACHE",
            "NPMDRIVE_BIN",
            "NPMDRIVE_NPMRC",
            "NPMDRIVE_NPM",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_no_env_vars_leaves_config_untouched() {
        clear_all();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_path_overrides_applied() {
        clear_all();
        env::set_var("NPMDRIVE_ROOT", "E:\\dev");
        env::set_var("NPMDRIVE_CACHE", "E:\\dev\\cache");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.root, Some(PathBuf::from("E:\\dev")));
        assert_eq!(config.cache, Some(PathBuf::from("E:\\dev\\cache")));
        assert!(config.prefix.is_none());

        clear_all();
    }

    #[test]
    #[serial]
    fn test_npm_program_override() {
        clear_all();
        env::set_var("NPMDRIVE_NPM", "C:\\nodejs\\npm.cmd");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.npm_program.as_deref(), Some("C:\\nodejs\\npm.cmd"));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_empty_value_rejected() {
        clear_all();
        env::set_var("NPMDRIVE_PREFIX", "  ");

        let mut config = Config::default();
        assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());

        clear_all();
    }
}
