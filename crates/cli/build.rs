// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Build scripts are expected to panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

/// Environment variables read by the crate, with the setting each one feeds.
const ENV_VARS: [(&str, &str); 7] = [
    ("SIMCTL_CONFIG", "TOML settings file"),
    ("SIMCTL_XCRUN", "program used in place of xcrun"),
    ("SIMCTL_NOXPC", "pass --noxpc to simctl"),
    ("SIMCTL_DEVICE_SET", "device set directory"),
    ("SIMCTL_TIMEOUT_MS", "per-command timeout in milliseconds"),
    ("SIMCTL_VERBOSE", "print every command before running it"),
    ("HOME", "home directory holding device logs"),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let path = std::path::Path::new(&out_dir).join("env_names.rs");
    let mut f = std::fs::File::create(path).unwrap();

    for (name, purpose) in ENV_VARS {
        writeln!(f, "/// `{name}`: {purpose}").unwrap();
        writeln!(f, "pub const {name}: &str = \"{name}\";").unwrap();
    }
}
