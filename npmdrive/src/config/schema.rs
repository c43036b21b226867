//! Configuration schema definitions.
//!
//! All fields are optional; resolution to concrete paths happens through
//! the accessor methods, which apply the Dev Drive defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Dev Drive root when neither config nor environment names one.
pub const DEFAULT_ROOT: &str = "D:\\packages";

/// Complete configuration structure.
///
/// Recognized fields: `root`, `prefix`, `cache`, `bin`, `npmrc`,
/// `npm_program`. Unset fields fall back to values derived from `root`.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use npmdrive::Config;
///
/// let config = Config {
///     root: Some(PathBuf::from("E:\\dev")),
///     ..Default::default()
/// };
/// assert_eq!(config.prefix(), config.root().join("npm"));
/// assert_eq!(config.bin(), config.prefix());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dev Drive root under which the npm directories are placed.
    pub root: Option<PathBuf>,

    /// Global install prefix. Default: `<root>\npm`.
    pub prefix: Option<PathBuf>,

    /// Package cache directory. Default: `<root>\npm-cache`.
    pub cache: Option<PathBuf>,

    /// Directory holding global executables. Default: the prefix (npm's
    /// Windows layout puts shims directly in the prefix).
    pub bin: Option<PathBuf>,

    /// Path of the npm per-user config file. Default: `~/.npmrc`.
    pub npmrc: Option<PathBuf>,

    /// Program name or path used to invoke npm.
    pub npm_program: Option<String>,
}

impl Config {
    /// The resolved Dev Drive root.
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }

    /// The resolved global install prefix.
    #[must_use]
    pub fn prefix(&self) -> PathBuf {
        self.prefix.clone().unwrap_or_else(|| self.root().join("npm"))
    }

    /// The resolved cache directory.
    #[must_use]
    pub fn cache(&self) -> PathBuf {
        self.cache
            .clone()
            .unwrap_or_else(|| self.root().join("npm-cache"))
    }

    /// The resolved global binaries directory.
    #[must_use]
    pub fn bin(&self) -> PathBuf {
        self.bin.clone().unwrap_or_else(|| self.prefix())
    }

    /// The resolved config file path.
    #[must_use]
    pub fn npmrc(&self) -> PathBuf {
        self.npmrc.clone().unwrap_or_else(|| {
            home::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".npmrc")
        })
    }

    /// Merges `higher` over `self`, field by field.
    #[must_use]
    pub fn merge(self, higher: Self) -> Self {
        Self {
            root: higher.root.or(self.root),
            prefix: higher.prefix.or(self.prefix),
            cache: higher.cache.or(self.cache),
            bin: higher.bin.or(self.bin),
            npmrc: higher.npmrc.or(self.npmrc),
            npm_program: higher.npm_program.or(self.npm_program),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_derive_from_root() {
        let config = Config::default();
        assert_eq!(config.root(), PathBuf::from(DEFAULT_ROOT));
        assert_eq!(config.prefix(), config.root().join("npm"));
        assert_eq!(config.cache(), config.root().join("npm-cache"));
        assert_eq!(config.bin(), config.prefix());
    }

    #[test]
    fn test_explicit_fields_win_over_root() {
        let config = Config {
            root: Some(PathBuf::from("E:\\dev")),
            prefix: Some(PathBuf::from("E:\\other\\prefix")),
            ..Default::default()
        };
        assert_eq!(config.prefix(), PathBuf::from("E:\\other\\prefix"));
        assert_eq!(config.cache(), PathBuf::from("E:\\dev").join("npm-cache"));
        // bin follows the explicit prefix.
        assert_eq!(config.bin(), PathBuf::from("E:\\other\\prefix"));
    }

    #[test]
    fn test_npmrc_defaults_under_home() {
        let config = Config::default();
        assert!(config.npmrc().ends_with(".npmrc"));
    }

    #[test]
    fn test_merge_higher_wins() {
        let lower = Config {
            root: Some(PathBuf::from("D:\\a")),
            cache: Some(PathBuf::from("D:\\a\\cache")),
            ..Default::default()
        };
        let higher = Config {
            root: Some(PathBuf::from("E:\\b")),
            ..Default::default()
        };

        let merged = lower.merge(higher);
        assert_eq!(merged.root, Some(PathBuf::from("E:\\b")));
        // Unset fields in the higher config fall through.
        assert_eq!(merged.cache, Some(PathBuf::from("D:\\a\\cache")));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = "root: D:\\dev\nnpm_program: npm.cmd\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.root, Some(PathBuf::from("D:\\dev")));
        assert_eq!(config.npm_program.as_deref(), Some("npm.cmd"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "root: D:\\dev\nbogus: true\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }
}
