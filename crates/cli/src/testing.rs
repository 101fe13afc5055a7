// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted runner for tests.
//!
//! Queues canned outputs and records every invocation it receives, so tests
//! can drive [`Simctl`](crate::Simctl) and the extensions without Xcode.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::command::Invocation;
use crate::error::SimctlError;
use crate::runner::{RunOutput, Runner};

#[derive(Clone, Debug)]
enum Scripted {
    Output(RunOutput),
    SpawnFailure,
}

/// Runner that replays queued responses in order.
///
/// When the queue is empty, every call fails as if the program was missing.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRunner {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an output for the next call
    pub fn push(&self, output: RunOutput) -> &Self {
        self.responses.lock().push_back(Scripted::Output(output));
        self
    }

    /// Queue a spawn failure for the next call
    pub fn push_spawn_failure(&self) -> &Self {
        self.responses.lock().push_back(Scripted::SpawnFailure);
        self
    }

    /// Every invocation received so far
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }

    /// Number of queued responses not consumed yet
    pub fn remaining(&self) -> usize {
        self.responses.lock().len()
    }
}

impl Runner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<RunOutput, SimctlError> {
        self.calls.lock().push(invocation.clone());
        match self.responses.lock().pop_front() {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::SpawnFailure) | None => Err(SimctlError::Spawn {
                program: invocation.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no scripted response"),
            }),
        }
    }
}

#[cfg(test)]
#[path = "testing_tests.rs"]
mod tests;
