// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Records produced from a listing report.

use serde::{Deserialize, Serialize};

/// A simulated device listed under a runtime header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    /// Device UDID.
    pub id: String,
    /// Boot state as printed by the tool, e.g. `Shutdown` or `Booted`.
    pub state: String,
    /// False when the line carried a trailing unavailability annotation.
    pub available: bool,
}

/// Devices reported under one `-- <runtime> --` header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeGroup {
    pub runtime: String,
    pub devices: Vec<DeviceRecord>,
}

impl RuntimeGroup {
    /// Create an empty group for a runtime label.
    pub fn new(runtime: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
            devices: Vec::new(),
        }
    }
}

/// A device type, e.g. `iPhone SE (com.apple.CoreSimulator.SimDeviceType.iPhone-SE)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTypeRecord {
    pub name: String,
    pub id: String,
}

/// An installed runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeRecord {
    pub name: String,
    /// Version and build, e.g. `10.3 - 14E269`.
    pub build: String,
    pub id: String,
    pub available: bool,
}

/// Everything recovered from one listing report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub devices: Vec<RuntimeGroup>,
    pub devicetypes: Vec<DeviceTypeRecord>,
    pub runtimes: Vec<RuntimeRecord>,
}

impl ParseResult {
    /// True when no section produced a record or group.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty() && self.devicetypes.is_empty() && self.runtimes.is_empty()
    }

    /// Iterate over every device paired with the runtime label it was listed under.
    pub fn all_devices(&self) -> impl Iterator<Item = (&str, &DeviceRecord)> {
        self.devices.iter().flat_map(|group| {
            group
                .devices
                .iter()
                .map(move |device| (group.runtime.as_str(), device))
        })
    }

    /// Find a device by UDID.
    pub fn find_device(&self, id: &str) -> Option<&DeviceRecord> {
        self.all_devices()
            .map(|(_, device)| device)
            .find(|device| device.id == id)
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
