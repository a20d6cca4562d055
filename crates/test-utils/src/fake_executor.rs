use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use phaserun::errors::{PhaserunError, Result};
use phaserun::exec::{CommandOutcome, CommandSpec, ExecutorBackend};

/// What the fake should report for each command it is asked to run.
#[derive(Debug, Clone, Copy)]
pub enum FakeOutcome {
    /// Report a clean exit.
    Success,
    /// Report a non-zero exit with the given code.
    Failed(i32),
    /// Report that the program could not be spawned at all.
    SpawnError,
}

/// A fake executor that:
/// - records every command it is asked to run
/// - reports a canned outcome instead of spawning a real process.
pub struct FakeExecutor {
    outcome: FakeOutcome,
    executed: Arc<Mutex<Vec<CommandSpec>>>,
}

impl FakeExecutor {
    /// Fake that reports `Success` for everything.
    pub fn new(executed: Arc<Mutex<Vec<CommandSpec>>>) -> Self {
        Self {
            outcome: FakeOutcome::Success,
            executed,
        }
    }

    pub fn with_outcome(
        executed: Arc<Mutex<Vec<CommandSpec>>>,
        outcome: FakeOutcome,
    ) -> Self {
        Self { outcome, executed }
    }
}

impl ExecutorBackend for FakeExecutor {
    fn run_command(
        &mut self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>> {
        let executed = Arc::clone(&self.executed);
        let outcome = self.outcome;

        Box::pin(async move {
            {
                let mut guard = executed.lock().unwrap();
                guard.push(spec.clone());
            }

            match outcome {
                FakeOutcome::Success => Ok(CommandOutcome::Success),
                FakeOutcome::Failed(code) => Ok(CommandOutcome::Failed(code)),
                FakeOutcome::SpawnError => Err(PhaserunError::Spawn {
                    program: spec.program.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "no such file or directory",
                    ),
                }),
            }
        })
    }
}
