//! Configuration builder.
//!
//! Merges the configuration sources with precedence (highest to lowest):
//! programmatic overrides, `NPMDRIVE_*` environment variables, the YAML
//! configuration file, built-in defaults.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Builds a resolved [`Config`] from all sources.
///
/// # Examples
///
/// ```
/// use npmdrive::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert!(config.root.is_none());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration file from an explicit path instead of the
    /// default location.
    #[must_use]
    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Skips configuration file loading.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a configuration file cannot be loaded, an
    /// environment variable value is invalid, or validation fails.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file_config) = ConfigLoader::load(self.config_path.as_deref())? {
                config = config.merge(file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config = config.merge(overrides);
        }

        validate(&config)?;
        Ok(config)
    }
}

/// Rejects configurations no setup run could act on.
fn validate(config: &Config) -> Result<()> {
    for (field, path) in [
        ("root", &config.root),
        ("prefix", &config.prefix),
        ("cache", &config.cache),
        ("bin", &config.bin),
        ("npmrc", &config.npmrc),
    ] {
        if let Some(p) = path {
            if p.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: field.to_string(),
                    message: "path must not be empty".to_string(),
                });
            }
        }
    }
    if let Some(program) = &config.npm_program {
        if program.trim().is_empty() {
            return Err(Error::Validation {
                field: "npm_program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
