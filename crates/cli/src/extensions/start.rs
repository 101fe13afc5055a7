// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Boot a device and bring up Simulator.app showing it.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

use crate::command::Invocation;
use crate::error::SimctlError;
use crate::runner::{RunOutput, Runner};
use crate::simctl::Simctl;

static XCODE_VERSION_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Xcode (.*)").ok());

/// First Xcode release whose Simulator.app accepts `-CurrentDeviceUDID`
const SIMULATOR_APP_MIN_XCODE: u32 = 9;

/// Errors that can occur while starting a simulator
#[derive(Debug, Error)]
pub enum StartError {
    #[error("Unable to parse xcodebuild version.")]
    XcodeVersionUnparseable,

    #[error("Could not get device list.")]
    DeviceListUnavailable,

    #[error("Simulator already running.")]
    AlreadyRunning,

    #[error("Could not boot simulator {udid}")]
    BootFailed { udid: String },

    #[error("Failed to get Xcode path")]
    XcodePathUnavailable,

    #[error(transparent)]
    Simctl(#[from] SimctlError),
}

/// Start the simulator for `udid`.
///
/// Xcode 8 and older boot through `instruments`. Newer releases boot with
/// simctl and then open Simulator.app on the device.
pub async fn start<R: Runner>(simctl: &Simctl<R>, udid: &str) -> Result<RunOutput, StartError> {
    let major = xcode_major_version(simctl).await?;
    if major < SIMULATOR_APP_MIN_XCODE {
        return Ok(simctl.run(&simctl.builder().instruments(udid)).await?);
    }

    let listing = simctl
        .list_json()
        .await
        .map_err(|_| StartError::DeviceListUnavailable)?;
    if listing.find_device(udid).is_some_and(|d| d.is_booted()) {
        return Err(StartError::AlreadyRunning);
    }

    if !simctl.boot(udid).await?.success() {
        return Err(StartError::BootFailed {
            udid: udid.to_string(),
        });
    }

    let xcode_path = simctl
        .run(&Invocation::new("xcode-select", ["-p"]))
        .await?;
    if !xcode_path.success() {
        return Err(StartError::XcodePathUnavailable);
    }

    let app = Path::new(xcode_path.stdout.trim()).join("Applications/Simulator.app");
    let open = Invocation::new(
        "open",
        [
            app.to_string_lossy().into_owned(),
            "--args".to_string(),
            "-CurrentDeviceUDID".to_string(),
            udid.to_string(),
        ],
    );
    Ok(simctl.run(&open).await?)
}

/// Major version reported by `xcodebuild -version`.
pub async fn xcode_major_version<R: Runner>(simctl: &Simctl<R>) -> Result<u32, StartError> {
    let output = simctl
        .run(&Invocation::new("xcodebuild", ["-version"]))
        .await
        .map_err(|_| StartError::XcodeVersionUnparseable)?;
    if !output.success() {
        return Err(StartError::XcodeVersionUnparseable);
    }
    parse_major_version(&output.stdout).ok_or(StartError::XcodeVersionUnparseable)
}

/// Leading integer of the version after `Xcode `, e.g. 13 for `Xcode 13.2.1`.
fn parse_major_version(text: &str) -> Option<u32> {
    let regex = XCODE_VERSION_REGEX.as_ref()?;
    let version = regex.captures(text)?.get(1)?.as_str().trim();
    let digits: String = version.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
#[path = "start_tests.rs"]
mod tests;
