// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed records for the text report printed by `xcrun simctl list`.
//!
//! The report is a sequence of `== Section ==` blocks. This crate turns the
//! "Devices", "Device Types" and "Runtimes" blocks into plain values:
//!
//! ```
//! let report = "== Device Types ==\n\
//!               iPhone SE (com.apple.CoreSimulator.SimDeviceType.iPhone-SE)";
//! let result = simctl_list_parser::parse(report);
//! assert_eq!(result.devicetypes[0].name, "iPhone SE");
//! assert!(result.devices.is_empty());
//! ```
//!
//! Parsing never fails. Lines that do not have a recognized shape are skipped,
//! since the report format is not stable across Xcode releases.

mod parser;
mod records;

pub use parser::parse;
pub use records::{DeviceRecord, DeviceTypeRecord, ParseResult, RuntimeGroup, RuntimeRecord};
