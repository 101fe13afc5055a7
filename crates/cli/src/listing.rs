// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed view of `simctl list -j`.
//!
//! Unknown keys are ignored and every collection defaults to empty, since
//! the JSON layout grows with each Xcode release.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// State string reported for a running device
pub const BOOTED: &str = "Booted";

/// Top-level `list -j` document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct JsonListing {
    /// Devices keyed by runtime identifier (older Xcode: runtime name)
    #[serde(default)]
    pub devices: BTreeMap<String, Vec<JsonDevice>>,

    #[serde(default)]
    pub devicetypes: Vec<JsonDeviceType>,

    #[serde(default)]
    pub runtimes: Vec<JsonRuntime>,

    /// Watch/phone pairs keyed by pair UDID
    #[serde(default)]
    pub pairs: BTreeMap<String, serde_json::Value>,
}

impl JsonListing {
    /// Find a device by UDID across every runtime.
    pub fn find_device(&self, udid: &str) -> Option<&JsonDevice> {
        self.devices
            .values()
            .flat_map(|devices| devices.iter())
            .find(|device| device.udid == udid)
    }

    /// Every device with its runtime key.
    pub fn all_devices(&self) -> impl Iterator<Item = (&str, &JsonDevice)> {
        self.devices.iter().flat_map(|(runtime, devices)| {
            devices
                .iter()
                .map(move |device| (runtime.as_str(), device))
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDevice {
    pub udid: String,
    pub name: String,
    pub state: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,

    /// Older Xcode releases: `"(available)"` or `"(unavailable, ...)"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type_identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

impl JsonDevice {
    pub fn is_booted(&self) -> bool {
        self.state == BOOTED
    }

    /// Availability from whichever field this Xcode release reports.
    pub fn available(&self) -> bool {
        match (self.is_available, self.availability.as_deref()) {
            (Some(available), _) => available,
            (None, Some(text)) => text == "(available)",
            (None, None) => true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDeviceType {
    pub name: String,
    pub identifier: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_family: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRuntime {
    pub name: String,
    pub identifier: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub buildversion: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

impl JsonRuntime {
    pub fn available(&self) -> bool {
        match (self.is_available, self.availability.as_deref()) {
            (Some(available), _) => available,
            (None, Some(text)) => text == "(available)",
            (None, None) => true,
        }
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
