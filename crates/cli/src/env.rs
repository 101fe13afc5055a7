// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by simctl are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

use crate::output_diagnostic::print_warning;

/// `SIMCTL_CONFIG`: Path to a TOML settings file.
pub fn config_path() -> Option<PathBuf> {
    var_path(names::SIMCTL_CONFIG)
}

/// `SIMCTL_XCRUN`: Program used in place of `xcrun`.
pub fn xcrun() -> Option<String> {
    std::env::var(names::SIMCTL_XCRUN)
        .ok()
        .filter(|v| !v.is_empty())
}

/// `SIMCTL_NOXPC`: Pass `--noxpc` to simctl.
pub fn noxpc() -> Option<bool> {
    var_bool(names::SIMCTL_NOXPC)
}

/// `SIMCTL_DEVICE_SET`: Device set directory passed as `--set`.
pub fn device_set() -> Option<PathBuf> {
    var_path(names::SIMCTL_DEVICE_SET)
}

/// `SIMCTL_TIMEOUT_MS`: Per-command timeout.
pub fn timeout_ms() -> Option<u64> {
    let value = std::env::var(names::SIMCTL_TIMEOUT_MS).ok()?;
    match value.trim().parse() {
        Ok(ms) => Some(ms),
        Err(_) => {
            print_warning(format_args!(
                "ignoring {}={:?}: not a number of milliseconds",
                names::SIMCTL_TIMEOUT_MS,
                value
            ));
            None
        }
    }
}

/// `SIMCTL_VERBOSE`: Print every command before running it.
pub fn verbose() -> Option<bool> {
    var_bool(names::SIMCTL_VERBOSE)
}

/// `HOME`: User's home directory.
pub fn home() -> Option<PathBuf> {
    var_path(names::HOME)
}

fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Accepts `1`/`true`/`yes` and `0`/`false`/`no`; anything else is unset.
fn var_bool(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        "" => None,
        _ => {
            print_warning(format_args!("ignoring {}={:?}: not a boolean", name, value));
            None
        }
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
