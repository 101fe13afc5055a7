// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process invocation.

use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::command::Invocation;
use crate::error::SimctlError;

/// Exit status, stdout and stderr of a finished command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Exit code, or -1 when the process was killed by a signal
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn new(status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self::new(0, stdout, "")
    }

    /// Failed output with the given status.
    pub fn failed(status: i32) -> Self {
        Self::new(status, "", "")
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Turn a non-zero status into `SimctlError::CommandFailed`.
    pub fn ensure_success(self, invocation: &Invocation) -> Result<Self, SimctlError> {
        if self.success() {
            Ok(self)
        } else {
            Err(SimctlError::CommandFailed {
                command: invocation.to_string(),
                status: self.status,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

impl From<std::process::Output> for RunOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs invocations and collects their output.
#[allow(async_fn_in_trait)]
pub trait Runner {
    async fn run(&self, invocation: &Invocation) -> Result<RunOutput, SimctlError>;
}

/// Runner backed by real child processes.
#[derive(Clone, Debug, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill commands that run longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Runner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<RunOutput, SimctlError> {
        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true) // Ensure process is killed if we drop the handle
            .spawn()
            .map_err(|source| SimctlError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| SimctlError::Timeout {
                    program: invocation.program.clone(),
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                })??,
            None => child.wait_with_output().await?,
        };

        Ok(output.into())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
