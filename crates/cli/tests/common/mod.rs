// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

//! Shared helpers for binary tests.
//!
//! Tests point the binary at a fake `xcrun` shell script that records its
//! argv and prints canned output, so no Xcode install is needed.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const SETTINGS_VARS: [&str; 6] = [
    "SIMCTL_CONFIG",
    "SIMCTL_XCRUN",
    "SIMCTL_NOXPC",
    "SIMCTL_DEVICE_SET",
    "SIMCTL_TIMEOUT_MS",
    "SIMCTL_VERBOSE",
];

/// The simctl binary with host settings cleared.
pub fn simctl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("simctl").unwrap();
    for var in SETTINGS_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// A fake `xcrun` living in its own temp directory.
pub struct FakeXcrun {
    dir: TempDir,
    program: PathBuf,
}

impl FakeXcrun {
    /// Write a script that records its arguments, then runs `body`.
    #[cfg(unix)]
    pub fn new(body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let program = dir.path().join("xcrun");
        let args = dir.path().join("args.txt");
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{}\n",
            args.display(),
            body
        );
        std::fs::write(&program, script).unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir, program }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Arguments of the last run, one per entry.
    pub fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("args.txt"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
