//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Loads the YAML configuration file.
///
/// # Examples
///
/// ```no_run
/// use npmdrive::config::ConfigLoader;
///
/// let config = ConfigLoader::load(None).unwrap();
/// assert!(config.is_none() || config.is_some());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file location: `~/.npmdrive.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        home::home_dir().map(|h| h.join(".npmdrive.yaml"))
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// An explicitly given path must exist; the default location is
    /// optional and its absence yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error when an explicit path does not exist, or when a
    /// file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Option<Config>> {
        match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(Error::InvalidPath {
                        path: explicit.to_path_buf(),
                        reason: "configuration file does not exist".to_string(),
                    });
                }
                Ok(Some(Self::load_file(explicit)?))
            }
            None => match Self::default_path() {
                Some(default) if default.exists() => Ok(Some(Self::load_file(&default)?)),
                _ => Ok(None),
            },
        }
    }

    /// Parses a single configuration file. An empty file is valid and
    /// yields the default configuration.
    fn load_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigLoader::load(Some(Path::new("/no/such/npmdrive.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_file_loaded() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("npmdrive.yaml");
        fs::write(&file, "root: E:\\dev\n").unwrap();

        let config = ConfigLoader::load(Some(&file)).unwrap().unwrap();
        assert_eq!(config.root, Some(PathBuf::from("E:\\dev")));
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("npmdrive.yaml");
        fs::write(&file, "\n").unwrap();

        let config = ConfigLoader::load(Some(&file)).unwrap().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("npmdrive.yaml");
        fs::write(&file, "root: [not, a, path\n").unwrap();

        assert!(ConfigLoader::load(Some(&file)).is_err());
    }
}
