// src/config/loader.rs

//! Loads the [`BuildContext`] from an environment-style lookup.
//!
//! The lookup is injected as a plain closure so the loader can be exercised
//! in tests without touching the process environment. The closure is wired
//! to `std::env::var` only at the program's outermost entry point
//! (`run_from_env` in `lib.rs`).

use crate::config::model::BuildContext;
use crate::errors::{PhaserunError, Result};

/// Base directory exported by the host build system.
pub const ENV_SRC_ROOT: &str = "SRCROOT";
/// Project name, forwarded as the script's second argument.
pub const ENV_PROJECT_NAME: &str = "PROJECT_NAME";
/// Script file name, appended to the source root.
pub const ENV_SCRIPT_NAME: &str = "SCRIPT_NAME";
/// Action verb, forwarded as the script's first argument.
pub const ENV_ACTION: &str = "ACTION";

/// All required variables, in the order they are reported when missing.
pub const REQUIRED_VARS: [&str; 4] = [
    ENV_SRC_ROOT,
    ENV_PROJECT_NAME,
    ENV_SCRIPT_NAME,
    ENV_ACTION,
];

/// Build a [`BuildContext`] from the given variable lookup.
///
/// Presence is the only requirement: a variable that is set to the empty
/// string is accepted. If one or more variables are absent, the returned
/// [`PhaserunError::MissingVariables`] names every missing one, in
/// [`REQUIRED_VARS`] order.
pub fn from_lookup<F>(lookup: F) -> Result<BuildContext>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing = Vec::new();
    let mut require = |name: &'static str| {
        let value = lookup(name);
        if value.is_none() {
            missing.push(name.to_string());
        }
        value.unwrap_or_default()
    };

    let context = BuildContext {
        src_root: require(ENV_SRC_ROOT),
        project_name: require(ENV_PROJECT_NAME),
        script_name: require(ENV_SCRIPT_NAME),
        action: require(ENV_ACTION),
    };

    if missing.is_empty() {
        Ok(context)
    } else {
        Err(PhaserunError::MissingVariables(missing))
    }
}
