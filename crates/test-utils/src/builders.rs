#![allow(dead_code)]

use phaserun::config::BuildContext;
use phaserun::config::loader::{
    ENV_ACTION, ENV_PROJECT_NAME, ENV_SCRIPT_NAME, ENV_SRC_ROOT,
};

/// Builder for `BuildContext` to simplify test setup.
pub struct BuildContextBuilder {
    context: BuildContext,
}

impl BuildContextBuilder {
    pub fn new() -> Self {
        Self {
            context: BuildContext {
                src_root: "/tmp/project".to_string(),
                script_name: "phase.sh".to_string(),
                action: "build".to_string(),
                project_name: "Demo".to_string(),
            },
        }
    }

    pub fn src_root(mut self, value: &str) -> Self {
        self.context.src_root = value.to_string();
        self
    }

    pub fn script_name(mut self, value: &str) -> Self {
        self.context.script_name = value.to_string();
        self
    }

    pub fn action(mut self, value: &str) -> Self {
        self.context.action = value.to_string();
        self
    }

    pub fn project_name(mut self, value: &str) -> Self {
        self.context.project_name = value.to_string();
        self
    }

    pub fn build(self) -> BuildContext {
        self.context
    }
}

impl Default for BuildContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup closure exposing a context's fields under the standard variable
/// names, for driving `phaserun::run` without a real environment.
pub fn env_lookup(context: &BuildContext) -> impl Fn(&str) -> Option<String> + '_ {
    move |name| match name {
        ENV_SRC_ROOT => Some(context.src_root.clone()),
        ENV_PROJECT_NAME => Some(context.project_name.clone()),
        ENV_SCRIPT_NAME => Some(context.script_name.clone()),
        ENV_ACTION => Some(context.action.clone()),
        _ => None,
    }
}
