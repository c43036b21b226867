//! Setup operations: planning, execution, and verification.
//!
//! The operation layer is split in three stages. [`build_setup_plan`]
//! turns a resolved configuration into an ordered list of actions.
//! [`PlanExecutor`] applies the actions best-effort, recording each
//! outcome in a [`RunReport`] instead of aborting on failure.
//! [`run_verification`] re-inspects the machine afterwards without
//! mutating anything.

pub mod executor;
pub mod plan;
pub mod setup;
pub mod verify;

pub use executor::{PlanExecutor, RunReport, StepReport, StepStatus, PATH_VAR};
pub use plan::{SetupAction, SetupPlan};
pub use setup::{
    build_setup_plan, CACHE_VAR_NAMES, DEFAULT_PREFIX_PATH_ENTRY, PREFIX_VAR_NAMES,
};
pub use verify::{run_verification, VerifyCheck, VerifyReport};
