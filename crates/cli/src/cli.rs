// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing mirroring the simctl subcommands.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::command::ListOptions;
use crate::config::Overrides;

/// Drive iOS simulators through xcrun simctl
#[derive(Parser, Debug)]
#[command(
    name = "simctl",
    version,
    about = "Drive iOS simulators through xcrun simctl",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// TOML settings file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Program used in place of xcrun
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub xcrun: Option<String>,

    /// Pass --noxpc to simctl
    #[arg(long, global = true)]
    pub noxpc: bool,

    /// Device set directory
    #[arg(long = "set", global = true, value_name = "PATH")]
    pub device_set: Option<PathBuf>,

    /// Kill simctl commands running longer than this
    #[arg(long, global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Print every command before running it
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// The command-line settings layer. Unset flags leave lower layers alone.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            xcrun: self.xcrun.clone(),
            noxpc: self.noxpc.then_some(true),
            device_set: self.device_set.clone(),
            timeout_ms: self.timeout_ms,
            verbose: self.verbose.then_some(true),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that simctl can be run
    Check,

    /// List devices, device types, runtimes and pairs as JSON
    List(ListArgs),

    /// Parse a text listing from stdin or a file and print it as JSON
    Parse {
        /// Read the listing from this file instead of stdin
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Show simctl help
    Help {
        subcommand: Option<String>,
    },

    /// Create a new device
    Create {
        name: String,
        device_type_id: String,
        runtime_id: String,
    },

    /// Delete a device
    Delete { device: String },

    /// Erase a device's contents and settings
    Erase { device: String },

    /// Boot a device
    Boot { device: String },

    /// Shut a device down
    Shutdown { device: String },

    /// Rename a device
    Rename { device: String, name: String },

    /// Print an environment variable from a running device
    Getenv { device: String, variable: String },

    /// Open a URL in a device
    Openurl { device: String, url: String },

    /// Add a photo to a device's library
    Addphoto { device: String, path: PathBuf },

    /// Install an app on a device
    Install { device: String, path: PathBuf },

    /// Uninstall an app from a device
    Uninstall { device: String, bundle_id: String },

    /// Launch an app by bundle identifier
    Launch {
        /// Wait for a debugger to attach
        #[arg(short = 'w')]
        wait_for_debugger: bool,
        device: String,
        bundle_id: String,
        /// Arguments passed to the app
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        argv: Vec<String>,
    },

    /// Spawn a process on a device
    Spawn {
        /// Wait for a debugger to attach
        #[arg(short = 'w')]
        wait_for_debugger: bool,
        /// Architecture to launch as
        #[arg(long)]
        arch: Option<String>,
        device: String,
        executable: PathBuf,
        /// Arguments passed to the executable
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        argv: Vec<String>,
    },

    /// Post a darwin notification on a device
    #[command(name = "notify_post")]
    NotifyPost {
        device: String,
        notification_name: String,
    },

    /// Trigger an iCloud sync on a device
    #[command(name = "icloud_sync")]
    IcloudSync { device: String },

    /// Pair a watch with a phone
    Pair { watch: String, phone: String },

    /// Remove a pair
    Unpair { pair_id: String },

    /// Make a pair active
    #[command(name = "pair_activate")]
    PairActivate { pair_id: String },

    /// Boot a device and open Simulator.app on it
    Start { udid: String },

    /// Follow a device's system log until interrupted
    Log {
        udid: String,
        /// Append lines to this file instead of printing them
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Sections for `list`. With none selected, simctl lists everything.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct ListArgs {
    #[arg(long)]
    pub devices: bool,

    #[arg(long)]
    pub devicetypes: bool,

    #[arg(long)]
    pub runtimes: bool,

    #[arg(long)]
    pub pairs: bool,

    /// Ask simctl for JSON and print it unchanged
    #[arg(short = 'j', long)]
    pub json: bool,
}

impl ListArgs {
    pub fn options(&self) -> ListOptions {
        ListOptions {
            devices: self.devices,
            devicetypes: self.devicetypes,
            runtimes: self.runtimes,
            pairs: self.pairs,
            json: self.json,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
