// src/lib.rs

pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use tracing::{info, warn};

use crate::config::BuildContext;
use crate::exec::{CommandOutcome, ExecutorBackend};

/// Fixed diagnostic printed to stdout when a required variable is absent.
pub const MISSING_VARIABLES_MSG: &str = "Error: Missing variables.";

/// Fixed diagnostic printed to stdout when the invoked command exits
/// non-zero or cannot be spawned.
pub const COMMAND_FAILED_MSG: &str = "Error: Failed to run command.";

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - context loading from the given variable lookup
/// - command composition
/// - execution through the given backend
/// - reporting on stdout
///
/// Returns the process exit code: 1 when required variables are missing
/// (nothing is executed in that case), 0 otherwise. A failure of the invoked
/// command itself is reported on stdout while the exit code stays 0.
pub async fn run<L, B>(lookup: L, executor: &mut B) -> u8
where
    L: Fn(&str) -> Option<String>,
    B: ExecutorBackend,
{
    let context = match config::from_lookup(lookup) {
        Ok(context) => context,
        Err(err) => {
            warn!(error = %err, "refusing to run without a complete build context");
            println!("{MISSING_VARIABLES_MSG}");
            return 1;
        }
    };

    run_with_context(&context, executor).await
}

/// Convenience wrapper for the binary: read the context from the process
/// environment.
///
/// Variables whose values are not valid UTF-8 are treated as unset. This is
/// the only place the process environment is consulted.
pub async fn run_from_env<B>(executor: &mut B) -> u8
where
    B: ExecutorBackend,
{
    run(|name| std::env::var(name).ok(), executor).await
}

/// Compose and execute the command for an already validated context.
pub async fn run_with_context<B>(context: &BuildContext, executor: &mut B) -> u8
where
    B: ExecutorBackend,
{
    let spec = context.command();
    info!(command = %spec.command_line(), "running build phase script");

    match executor.run_command(spec).await {
        Ok(CommandOutcome::Success) => 0,
        Ok(CommandOutcome::Failed(code)) => {
            warn!(exit_code = code, "build phase script exited non-zero");
            println!("{COMMAND_FAILED_MSG}");
            0
        }
        Err(err) => {
            warn!(error = %err, "build phase script could not be run");
            println!("{COMMAND_FAILED_MSG}");
            0
        }
    }
}
