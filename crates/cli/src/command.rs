// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument vectors for every simctl subcommand.
//!
//! Commands are passed to the process layer as argv, never through a shell,
//! so arguments are not escaped.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{Settings, DEFAULT_XCRUN};

/// A program plus its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments as string slices, handy for comparisons.
    pub fn arg_strs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Renders a shell-like command line for diagnostics.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_arg(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", display_arg(arg))?;
        }
        Ok(())
    }
}

fn display_arg(arg: &str) -> String {
    let needs_quotes = arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"');
    if !needs_quotes {
        return arg.to_string();
    }
    let escaped = arg.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Sections requested from `simctl list`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub devices: bool,
    pub devicetypes: bool,
    pub runtimes: bool,
    pub pairs: bool,
    /// Ask for `-j` output instead of the text report
    pub json: bool,
}

impl ListOptions {
    /// Every section, as JSON.
    pub fn json() -> Self {
        Self {
            json: true,
            ..Self::default()
        }
    }
}

/// Builds simctl invocations with the configured global options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandBuilder {
    xcrun: String,
    noxpc: bool,
    device_set: Option<PathBuf>,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_XCRUN)
    }
}

impl CommandBuilder {
    pub fn new(xcrun: impl Into<String>) -> Self {
        Self {
            xcrun: xcrun.into(),
            noxpc: false,
            device_set: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.xcrun.clone())
            .with_noxpc(settings.noxpc)
            .with_device_set(settings.device_set.clone())
    }

    /// Pass `--noxpc` before the subcommand
    pub fn with_noxpc(mut self, noxpc: bool) -> Self {
        self.noxpc = noxpc;
        self
    }

    /// Pass `--set <path>` before the subcommand
    pub fn with_device_set(mut self, device_set: Option<PathBuf>) -> Self {
        self.device_set = device_set;
        self
    }

    pub fn xcrun(&self) -> &str {
        &self.xcrun
    }

    pub fn noxpc(&self) -> bool {
        self.noxpc
    }

    pub fn device_set(&self) -> Option<&Path> {
        self.device_set.as_deref()
    }

    fn simctl<I, S>(&self, subcommand: &str, rest: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = vec!["simctl".to_string()];
        if self.noxpc {
            args.push("--noxpc".to_string());
        }
        if let Some(ref set) = self.device_set {
            args.push("--set".to_string());
            args.push(path_arg(set));
        }
        args.push(subcommand.to_string());
        args.extend(rest.into_iter().map(Into::into));
        Invocation {
            program: self.xcrun.clone(),
            args,
        }
    }

    pub fn help(&self, subcommand: Option<&str>) -> Invocation {
        self.simctl("help", subcommand)
    }

    pub fn create(&self, name: &str, device_type_id: &str, runtime_id: &str) -> Invocation {
        self.simctl("create", [name, device_type_id, runtime_id])
    }

    pub fn delete(&self, device: &str) -> Invocation {
        self.simctl("delete", [device])
    }

    pub fn erase(&self, device: &str) -> Invocation {
        self.simctl("erase", [device])
    }

    pub fn boot(&self, device: &str) -> Invocation {
        self.simctl("boot", [device])
    }

    pub fn shutdown(&self, device: &str) -> Invocation {
        self.simctl("shutdown", [device])
    }

    pub fn rename(&self, device: &str, name: &str) -> Invocation {
        self.simctl("rename", [device, name])
    }

    pub fn getenv(&self, device: &str, variable: &str) -> Invocation {
        self.simctl("getenv", [device, variable])
    }

    pub fn openurl(&self, device: &str, url: &str) -> Invocation {
        self.simctl("openurl", [device, url])
    }

    pub fn addphoto(&self, device: &str, path: &Path) -> Invocation {
        self.simctl("addphoto", [device.to_string(), path_arg(path)])
    }

    pub fn install(&self, device: &str, path: &Path) -> Invocation {
        self.simctl("install", [device.to_string(), path_arg(path)])
    }

    pub fn uninstall(&self, device: &str, bundle_id: &str) -> Invocation {
        self.simctl("uninstall", [device, bundle_id])
    }

    /// `launch [-w] <device> <bundle_id> [argv...]`
    pub fn launch(
        &self,
        wait_for_debugger: bool,
        device: &str,
        bundle_id: &str,
        argv: &[String],
    ) -> Invocation {
        let mut rest = Vec::with_capacity(argv.len() + 3);
        if wait_for_debugger {
            rest.push("-w".to_string());
        }
        rest.push(device.to_string());
        rest.push(bundle_id.to_string());
        rest.extend(argv.iter().cloned());
        self.simctl("launch", rest)
    }

    /// `spawn [-w] [--arch=<arch>] <device> <executable> [argv...]`
    pub fn spawn(
        &self,
        wait_for_debugger: bool,
        arch: Option<&str>,
        device: &str,
        executable: &Path,
        argv: &[String],
    ) -> Invocation {
        let mut rest = Vec::with_capacity(argv.len() + 4);
        if wait_for_debugger {
            rest.push("-w".to_string());
        }
        if let Some(arch) = arch {
            rest.push(format!("--arch={}", arch));
        }
        rest.push(device.to_string());
        rest.push(path_arg(executable));
        rest.extend(argv.iter().cloned());
        self.simctl("spawn", rest)
    }

    pub fn list(&self, options: &ListOptions) -> Invocation {
        let sections = [
            (options.devices, "devices"),
            (options.devicetypes, "devicetypes"),
            (options.runtimes, "runtimes"),
            (options.pairs, "pairs"),
            (options.json, "-j"),
        ];
        self.simctl(
            "list",
            sections
                .into_iter()
                .filter_map(|(enabled, arg)| enabled.then_some(arg)),
        )
    }

    pub fn notify_post(&self, device: &str, notification_name: &str) -> Invocation {
        self.simctl("notify_post", [device, notification_name])
    }

    pub fn icloud_sync(&self, device: &str) -> Invocation {
        self.simctl("icloud_sync", [device])
    }

    pub fn pair(&self, watch: &str, phone: &str) -> Invocation {
        self.simctl("pair", [watch, phone])
    }

    pub fn unpair(&self, pair_id: &str) -> Invocation {
        self.simctl("unpair", [pair_id])
    }

    pub fn pair_activate(&self, pair_id: &str) -> Invocation {
        self.simctl("pair_activate", [pair_id])
    }

    /// `xcrun instruments -w <device>`, used to boot on Xcode 8 and older.
    pub fn instruments(&self, device: &str) -> Invocation {
        Invocation::new(self.xcrun.clone(), ["instruments", "-w", device])
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
