//! Planning of the setup run.
//!
//! Translates a resolved [`Config`] into the ordered action list that
//! relocates npm onto the Dev Drive.

use crate::config::Config;

use super::plan::{SetupAction, SetupPlan};

/// Stale PATH entry left behind by npm's default install location.
///
/// Expanded against the environment at reconciliation time.
pub const DEFAULT_PREFIX_PATH_ENTRY: &str = "%APPDATA%\\npm";

/// The persistent variables npm reads for its prefix and cache.
///
/// Both casing variants are set: npm itself reads the lowercase form,
/// while other tooling conventionally expects the uppercase one.
pub const PREFIX_VAR_NAMES: [&str; 2] = ["npm_config_prefix", "NPM_CONFIG_PREFIX"];

/// Casing variants of the cache variable, see [`PREFIX_VAR_NAMES`].
pub const CACHE_VAR_NAMES: [&str; 2] = ["npm_config_cache", "NPM_CONFIG_CACHE"];

/// Builds the setup plan for `config`.
///
/// When `npm_available` is false the `npm config set` actions are
/// omitted and a warning is recorded; everything else still runs.
///
/// # Examples
///
/// ```
/// use npmdrive::operations::build_setup_plan;
/// use npmdrive::Config;
///
/// let plan = build_setup_plan(&Config::default(), false);
/// assert!(!plan.is_empty());
/// assert_eq!(plan.warnings.len(), 1);
/// ```
#[must_use]
pub fn build_setup_plan(config: &Config, npm_available: bool) -> SetupPlan {
    let prefix = config.prefix();
    let cache = config.cache();
    let bin = config.bin();

    let mut plan = SetupPlan::new(format!(
        "Relocate npm prefix and cache under {}",
        config.root().display()
    ));

    let mut dirs = vec![prefix.clone(), cache.clone()];
    if !dirs.contains(&bin) {
        dirs.push(bin.clone());
    }
    for dir in dirs {
        plan = plan.add_action(SetupAction::CreateDirectory(dir));
    }

    for name in PREFIX_VAR_NAMES {
        plan = plan.add_action(SetupAction::SetEnvVar {
            name: name.to_string(),
            value: prefix.display().to_string(),
        });
    }
    for name in CACHE_VAR_NAMES {
        plan = plan.add_action(SetupAction::SetEnvVar {
            name: name.to_string(),
            value: cache.display().to_string(),
        });
    }

    plan = plan.add_action(SetupAction::ReconcilePath {
        required: vec![bin.display().to_string()],
        removals: vec![DEFAULT_PREFIX_PATH_ENTRY.to_string()],
    });

    plan = plan.add_action(SetupAction::PatchNpmrc {
        path: config.npmrc(),
        prefix: prefix.clone(),
        cache: cache.clone(),
    });

    if npm_available {
        plan = plan
            .add_action(SetupAction::NpmConfigSet {
                key: "prefix".to_string(),
                value: prefix.display().to_string(),
            })
            .add_action(SetupAction::NpmConfigSet {
                key: "cache".to_string(),
                value: cache.display().to_string(),
            });
    } else {
        plan = plan.add_warning(
            "npm executable not found; 'npm config set' and verification against npm are skipped",
        );
    }

    plan
}
