// src/config/model.rs

//! The build context: the four values the host build system hands us.
//!
//! The context is deliberately a plain struct of owned strings. It is filled
//! in exactly once per invocation by [`crate::config::loader`] and never
//! mutated afterwards.

use crate::exec::CommandSpec;

/// Everything needed to compose the build-phase command.
///
/// The host build system exports these as environment variables; the loader
/// snapshots them at startup so the rest of the crate never touches the
/// process environment directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Base directory the script name is appended to.
    pub src_root: String,

    /// File name of the script to invoke, relative to `src_root`.
    pub script_name: String,

    /// Action verb passed to the script as its first argument
    /// (e.g. a build phase name like `build` or `clean`).
    pub action: String,

    /// Project name passed to the script as its second argument.
    pub project_name: String,
}

impl BuildContext {
    /// Path of the script to invoke: `{src_root}/{script_name}`.
    ///
    /// This is a literal join with a single `/`, not a platform path join;
    /// the values are concatenated exactly as provided.
    pub fn script_path(&self) -> String {
        format!("{}/{}", self.src_root, self.script_name)
    }

    /// The fully composed command: the script path as the program, with
    /// `[action, project_name]` as its argument vector, in that order.
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(
            self.script_path(),
            vec![self.action.clone(), self.project_name.clone()],
        )
    }
}
