// src/exec/command.rs

//! Command composition and the real process runner.

use std::fmt;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{PhaserunError, Result};

/// A fully composed external command: a program path plus its argument
/// vector.
///
/// The program and arguments are kept separate so execution can pass them
/// straight through as an argv, with no shell in between. The flat
/// single-line rendering is still available via [`CommandSpec::command_line`]
/// for logging and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Path of the program to run.
    pub program: String,

    /// Arguments, passed to the program verbatim and in order.
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Render the command as a single line: program and arguments joined by
    /// single spaces.
    ///
    /// No quoting or escaping is applied; values containing spaces or shell
    /// metacharacters appear verbatim.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Outcome of a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    Failed(i32),
}

impl CommandOutcome {
    pub fn from_status(status: std::process::ExitStatus) -> Self {
        if status.success() {
            CommandOutcome::Success
        } else {
            CommandOutcome::Failed(status.code().unwrap_or(-1))
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

/// Run the command and wait for it to finish.
///
/// The child inherits this process's standard streams, so the script's own
/// output goes wherever ours does. Spawn failures (program not found,
/// permission denied) surface as [`PhaserunError::Spawn`].
pub async fn run_command(spec: &CommandSpec) -> Result<CommandOutcome> {
    debug!(program = %spec.program, args = ?spec.args, "spawning command");

    let status = Command::new(&spec.program)
        .args(&spec.args)
        .status()
        .await
        .map_err(|source| PhaserunError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

    debug!(
        exit_code = status.code().unwrap_or(-1),
        success = status.success(),
        "command exited"
    );

    Ok(CommandOutcome::from_status(status))
}
