// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The invoker talks to an `ExecutorBackend` instead of spawning processes
//! directly. This makes it easy to swap in a fake executor in tests while
//! keeping the production implementation in [`command`].
//!
//! - `ProcessExecutor` is the default implementation used by `phaserun`.
//!   It runs the composed command as a real child process.
//! - Tests can provide their own `ExecutorBackend` that, for example, records
//!   which commands were requested and reports a canned outcome.
//!
//! [`command`]: super::command

use std::future::Future;
use std::pin::Pin;

use super::command::{self, CommandOutcome, CommandSpec};
use crate::errors::Result;

/// Trait abstracting how a composed command is executed.
///
/// Production code uses [`ProcessExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait ExecutorBackend: Send {
    /// Run the given command to completion and report its outcome.
    ///
    /// The implementation is free to:
    /// - spawn an OS process and wait for it (production)
    /// - record the request and return a canned outcome (tests)
    fn run_command(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>>;
}

/// Real executor backend used in production.
///
/// Wraps [`command::run_command`]: the child process inherits the standard
/// streams and the call blocks until it exits.
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorBackend for ProcessExecutor {
    fn run_command(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>> {
        Box::pin(async move { command::run_command(&spec).await })
    }
}
