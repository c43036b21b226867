//! npmdrive - relocate npm's global prefix, cache, and bin onto a Dev Drive.
//!
//! npm's defaults put the global prefix and package cache on the system
//! drive. This crate moves them under a configurable Dev Drive root and
//! keeps the machine consistent: directories on disk, persistent and
//! process environment variables, the user's `.npmrc`, npm's own config,
//! and a PATH that contains the new bin directory exactly once with the
//! stale default entry removed.
//!
//! # Architecture
//!
//! - [`config`]: layered configuration (defaults, YAML file, `NPMDRIVE_*`
//!   environment variables, programmatic overrides)
//! - [`pathlist`]: pure PATH-list reconciliation, including repair of
//!   entries merged by a missing separator
//! - [`env`]: the [`EnvStore`] abstraction over process-scope and
//!   user-persistent variables
//! - [`npmrc`]: line-preserving editor for the npm config file
//! - [`npm`]: subprocess client for the npm executable
//! - [`operations`]: plan construction, best-effort execution, and
//!   read-only verification
//!
//! # Examples
//!
//! ```
//! use npmdrive::operations::{build_setup_plan, PlanExecutor, run_verification};
//! use npmdrive::{Config, MemoryEnv, NpmClient};
//!
//! let config = Config::default();
//! let plan = build_setup_plan(&config, false);
//!
//! let mut env = MemoryEnv::new();
//! let npm = NpmClient::new();
//! let report = PlanExecutor::new(&mut env, &npm).dry_run().execute(&plan);
//! assert!(report.success());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod env;
pub mod error;
pub mod fsops;
pub mod logging;
pub mod npm;
pub mod npmrc;
pub mod operations;
pub mod pathlist;

pub use config::{Config, ConfigBuilder};
pub use env::{EnvScope, EnvStore, MemoryEnv, SystemEnv};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use npm::NpmClient;
pub use operations::{
    build_setup_plan, run_verification, PlanExecutor, RunReport, SetupAction, SetupPlan,
    StepStatus, VerifyReport,
};
pub use pathlist::{PathReconciler, ReconcileOutcome};
