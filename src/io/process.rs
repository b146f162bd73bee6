use std::process::ExitStatus;

use tracing::debug;

use crate::core::invocation::Invocation;
use crate::error::{Error, Result};

/// Exit information of a finished external process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// None when the process was killed by a signal
    pub code: Option<i32>,
    pub success: bool,
}

impl ProcessOutcome {
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            success: code == 0,
        }
    }
}

impl From<ExitStatus> for ProcessOutcome {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
        }
    }
}

/// Runs an `Invocation` to completion.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome> {
        (**self).run(invocation)
    }
}

/// Spawns the real program and blocks until it exits. Stdio is inherited so
/// nbconvert's own progress output reaches the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome> {
        debug!("Spawning: {}", invocation);
        let status = invocation
            .command()
            .status()
            .map_err(|e| Error::Spawn {
                program: invocation.program.clone(),
                source: e,
            })?;
        Ok(status.into())
    }
}
