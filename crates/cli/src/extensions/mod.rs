// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers built from several simctl calls.

mod log;
mod start;

pub use log::{device_log_path, LogFollower, LogHandle, LogSink, DEFAULT_POLL_INTERVAL};
pub use start::{start, xcode_major_version, StartError};
