//! Blocking invocation of the external utilities.
//!
//! `SystemRunner` is the only place that touches `std::process`; the launcher
//! talks to it through `CommandRunner` so tests can record invocations
//! instead of spawning.

use std::process::{Command, Stdio};

use crate::error::ToolFailure;

pub trait CommandRunner {
    /// Run `program` with `args`, returning its full stdout. Stderr flows
    /// through to the parent. A non-zero exit is an error.
    fn capture(&self, program: &str, args: &[&str]) -> Result<String, ToolFailure>;

    /// Run `program` with `args` and inherited stdio. A non-zero exit is an
    /// error.
    fn run(&self, program: &str, args: &[&str]) -> Result<(), ToolFailure>;
}

/// Runs real child processes, resolving bare program names against `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(program: &str) -> Result<Command, ToolFailure> {
        let path = which::which(program).map_err(|_| ToolFailure::NotFound {
            program: program.to_string(),
        })?;
        Ok(Command::new(path))
    }
}

impl CommandRunner for SystemRunner {
    fn capture(&self, program: &str, args: &[&str]) -> Result<String, ToolFailure> {
        let mut cmd = Self::command(program)?;
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        tracing::debug!(program, ?args, "spawning");
        let output = cmd.output().map_err(|source| ToolFailure::Spawn {
            program: program.to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(ToolFailure::Exited {
                program: program.to_string(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<(), ToolFailure> {
        let mut cmd = Self::command(program)?;
        cmd.args(args);

        tracing::debug!(program, ?args, "spawning");
        let status = cmd.status().map_err(|source| ToolFailure::Spawn {
            program: program.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(ToolFailure::Exited {
                program: program.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}
