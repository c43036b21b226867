//! Configuration system for npmdrive.
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`NPMDRIVE_*`)
//! 3. YAML configuration file (`~/.npmdrive.yaml` or an explicit path)
//! 4. Built-in defaults (derived from the Dev Drive root)
//!
//! # Examples
//!
//! ```
//! use std::path::PathBuf;
//! use npmdrive::config::ConfigBuilder;
//! use npmdrive::Config;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         root: Some(PathBuf::from("E:\\dev")),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.prefix(), PathBuf::from("E:\\dev").join("npm"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, DEFAULT_ROOT};
