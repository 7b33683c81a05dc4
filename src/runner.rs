//! Pipeline execution: spawn every stage, wire adjacent stages together with
//! OS pipes, and reduce the stage exit statuses to a single exit code.
//!
//! The runner never terminates the process itself; it hands the computed code
//! back to the caller so `main` can perform the one `process::exit`.

use std::process::{Child, Command, Stdio};

use crate::error::UgError;
use crate::parser::StageSpec;

/// Run a parsed pipeline to completion and return its exit code.
///
/// A single stage inherits stdin/stdout/stderr directly. In a multi-stage
/// pipeline each stage's stdout streams into the next stage's stdin as the
/// data is produced; only the final stage's stdout and stderr reach the
/// user. Intermediate stderr is discarded, so an intermediate failure is
/// only visible through its exit code.
///
/// Stages are waited for in spawn order and the first non-zero exit code is
/// returned immediately, without waiting for the remaining stages. A stage
/// terminated by a signal counts as exit code 1.
pub fn run_pipeline(stages: &[StageSpec]) -> Result<i32, UgError> {
    // Resolve every executable up front so a missing program fails the whole
    // invocation before any process is spawned.
    let mut resolved = Vec::with_capacity(stages.len());
    for stage in stages {
        let path = which::which(&stage.program).map_err(|err| UgError::SpawnFailure {
            program: stage.program.clone(),
            reason: err.to_string(),
        })?;
        resolved.push(path);
    }

    let last = stages.len().saturating_sub(1);
    let mut children: Vec<Child> = Vec::with_capacity(stages.len());

    for (i, stage) in stages.iter().enumerate() {
        let mut command = Command::new(&resolved[i]);
        command.args(&stage.args);

        match children.last_mut() {
            // The first stage reads from the invoking terminal, so
            // interactive pipelines keep working.
            None => {
                command.stdin(Stdio::inherit());
            }
            Some(prev) => {
                let feed = prev.stdout.take().ok_or_else(|| UgError::SpawnFailure {
                    program: stage.program.clone(),
                    reason: "previous stage has no captured stdout".to_string(),
                })?;
                command.stdin(Stdio::from(feed));
            }
        }

        if i == last {
            command.stdout(Stdio::inherit());
            command.stderr(Stdio::inherit());
        } else {
            command.stdout(Stdio::piped());
            command.stderr(Stdio::null());
        }

        match command.spawn() {
            Ok(child) => children.push(child),
            Err(err) => {
                // Don't leave the earlier stages running.
                for mut child in children {
                    let _ = child.kill();
                    let _ = child.wait();
                }
                return Err(UgError::SpawnFailure {
                    program: stage.program.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    for child in &mut children {
        let status = child.wait()?;
        if !status.success() {
            return Ok(status.code().unwrap_or(1));
        }
    }

    Ok(0)
}
