// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while running simctl commands.

use thiserror::Error;

/// Message shown when the prerequisite check fails.
pub const NOT_FOUND_MESSAGE: &str = "simctl was not found.\n\
Check that you have Xcode installed:\n\
\txcodebuild -version\n\
Check that you have Xcode selected:\n\
\txcode-select --print-path";

/// Errors that can occur when invoking simctl or a helper tool
#[derive(Debug, Error)]
pub enum SimctlError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' did not finish within {timeout_ms}ms")]
    Timeout { program: String, timeout_ms: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("Command '{command}' exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },
}
