// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the composed build-phase
//! command, using `tokio::process::Command`, and reporting its outcome back
//! to the invoker.
//!
//! - [`command`] defines [`CommandSpec`] and [`CommandOutcome`] and owns the
//!   real process runner.
//! - [`backend`] provides the `ExecutorBackend` trait and a concrete
//!   `ProcessExecutor` that the invoker uses in production, and which tests
//!   can replace with a fake implementation.

pub mod backend;
pub mod command;

pub use backend::{ExecutorBackend, ProcessExecutor};
pub use command::{CommandOutcome, CommandSpec};
