use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};

use crate::config::PilotConfig;
use crate::runner::errors::RunnerError;
use crate::runner::types::{Invocation, NIRCMD_PROGRAM, UNSUPPORTED_HOST_EXIT_CODE};

/// Resolve the path to the NirCmd executable.
///
/// An explicit `[runner] binary_path` takes precedence; otherwise the
/// program is looked up on PATH.
pub fn resolve_binary(config: &PilotConfig) -> Result<PathBuf, RunnerError> {
    if let Some(path) = &config.runner.binary_path {
        if path.exists() {
            return Ok(path.clone());
        }
        return Err(RunnerError::BinaryNotFound {
            program: path.display().to_string(),
        });
    }

    which::which(NIRCMD_PROGRAM).map_err(|_| RunnerError::BinaryNotFound {
        program: NIRCMD_PROGRAM.to_string(),
    })
}

/// Spawn NirCmd with a finished argument vector and wait for its exit code.
///
/// All validation happens before this point; by the time a vector arrives
/// here it is guaranteed complete. On a non-Windows host no process is
/// spawned and [`UNSUPPORTED_HOST_EXIT_CODE`] is returned.
pub fn run_nircmd(args: &[String], config: &PilotConfig) -> Result<i32, RunnerError> {
    if !cfg!(target_os = "windows") {
        warn!(
            event = "core.runner.unsupported_host",
            os = std::env::consts::OS,
            message = "NirCmd only runs on Windows - skipping invocation"
        );
        return Ok(UNSUPPORTED_HOST_EXIT_CODE);
    }

    let program = resolve_binary(config)?;
    let invocation = Invocation::new(program, args.to_vec());

    debug!(
        event = "core.runner.invoke_started",
        command_line = %invocation.command_line()
    );

    let output = Command::new(&invocation.program)
        .args(&invocation.args)
        .output()
        .map_err(|e| RunnerError::SpawnFailed {
            message: e.to_string(),
        })?;

    // A None code means the process was killed by a signal; NirCmd reports
    // failures through nonzero codes, so fold that case into the sentinel.
    let exit_code = output.status.code().unwrap_or(UNSUPPORTED_HOST_EXIT_CODE);

    info!(
        event = "core.runner.invoke_completed",
        command_line = %invocation.command_line(),
        exit_code
    );

    Ok(exit_code)
}
