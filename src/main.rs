// src/main.rs

use std::process::ExitCode;

use phaserun::exec::ProcessExecutor;
use phaserun::logging;

/// Thin binary wrapper: snapshot the environment, run, translate the result
/// into a process exit code. No command-line arguments are consulted.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialise logging: {err}");
    }

    let mut executor = ProcessExecutor::new();
    let code = phaserun::run_from_env(&mut executor).await;
    ExitCode::from(code)
}
