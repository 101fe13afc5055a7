// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented parser for the listing report.
//!
//! The report looks like:
//!
//! ```text
//! == Device Types ==
//! iPhone 7 (com.apple.CoreSimulator.SimDeviceType.iPhone-7)
//! == Runtimes ==
//! iOS 7.0 (7.0 - Unknown) (com.apple.CoreSimulator.SimRuntime.iOS-7-0) (unavailable, runtime path not found)
//! iOS 10.3 (10.3 - 14E269) (com.apple.CoreSimulator.SimRuntime.iOS-10-3)
//! == Devices ==
//! -- iOS 10.3 --
//!     iPhone 7 (5EFAC0B6-0583-48EA-BDC6-E80FBFF76116) (Booted)
//! ```
//!
//! Each `==` header switches the section being read. Inside "Devices", `--`
//! headers open a new runtime group. Device and runtime lines carry a fourth
//! parenthesized group only when the entry is unavailable.

use regex::Regex;
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::records::{DeviceRecord, DeviceTypeRecord, ParseResult, RuntimeGroup, RuntimeRecord};

const SECTION_HEADER_PREFIX: &str = "==";
const RUNTIME_HEADER_PREFIX: &str = "--";

/// `-- iOS 10.3 --`
static RUNTIME_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"--\s(.*)\s--").expect("runtime header regex is invalid")
});

/// `Name (a) (b) (unavailable reason)`
static UNAVAILABLE_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"(.*)\(([^)]+)\)\s\(([^)]+)\)\s\(([^)]+)\)")
        .expect("unavailable entry regex is invalid")
});

/// `Name (a) (b)`
static AVAILABLE_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"(.*)\(([^)]+)\)\s\(([^)]+)\)").expect("available entry regex is invalid")
});

/// `Name (id)`
static DEVICE_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"^(.*)\(([^)]+)\)").expect("device type regex is invalid")
});

/// Parse a full listing report.
///
/// Unrecognized lines are skipped; the result is empty when no known
/// section is present. Each call starts from fresh state.
pub fn parse(text: &str) -> ParseResult {
    let mut state = ListingState::default();
    for line in text.lines() {
        state.feed(line);
    }
    state.finish()
}

impl FromStr for ParseResult {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

/// Section currently being read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    None,
    Device,
    DeviceType,
    Runtime,
}

impl Mode {
    /// Classify a `==` header line.
    ///
    /// Plain substring checks, tried in order. "Device Types" does not
    /// contain "Devices", so the checks cannot both hit.
    fn from_header(line: &str) -> Self {
        if line.contains("Devices") {
            Mode::Device
        } else if line.contains("Device Types") {
            Mode::DeviceType
        } else if line.contains("Runtimes") {
            Mode::Runtime
        } else {
            Mode::None
        }
    }
}

/// Fields captured from a device or runtime line.
#[derive(Debug, PartialEq, Eq)]
struct AnnotatedEntry<'a> {
    name: &'a str,
    first: &'a str,
    second: &'a str,
    available: bool,
}

/// Patterns for device and runtime lines, strictest first.
///
/// Only the trailing group is optional; its presence marks the entry
/// unavailable.
fn entry_rules() -> [(&'static Regex, bool); 2] {
    [
        (&*UNAVAILABLE_ENTRY_REGEX, false),
        (&*AVAILABLE_ENTRY_REGEX, true),
    ]
}

fn match_entry(line: &str) -> Option<AnnotatedEntry<'_>> {
    entry_rules().into_iter().find_map(|(regex, available)| {
        let captures = regex.captures(line)?;
        let field = |i: usize| captures.get(i).map_or("", |m| m.as_str().trim());
        Some(AnnotatedEntry {
            name: field(1),
            first: field(2),
            second: field(3),
            available,
        })
    })
}

fn match_device_type(line: &str) -> Option<DeviceTypeRecord> {
    let captures = DEVICE_TYPE_REGEX.captures(line)?;
    let field = |i: usize| captures.get(i).map_or("", |m| m.as_str().trim());
    Some(DeviceTypeRecord {
        name: field(1).to_string(),
        id: field(2).to_string(),
    })
}

fn runtime_label(line: &str) -> &str {
    RUNTIME_HEADER_REGEX
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map_or(line, |m| m.as_str())
}

/// Per-call parser state.
#[derive(Debug, Default)]
struct ListingState {
    mode: Mode,
    pending_group: Option<RuntimeGroup>,
    result: ParseResult,
}

impl ListingState {
    fn feed(&mut self, line: &str) {
        if line.starts_with(SECTION_HEADER_PREFIX) {
            self.leave_mode();
            self.mode = Mode::from_header(line);
            return;
        }

        match self.mode {
            Mode::None => {}
            Mode::Device => self.parse_device_line(line),
            Mode::DeviceType => self.parse_device_type_line(line),
            Mode::Runtime => self.parse_runtime_line(line),
        }
    }

    /// Close out the active section. End of input is handled the same way
    /// as a header that switches to no section.
    fn leave_mode(&mut self) {
        match self.mode {
            Mode::Device => self.flush_group(),
            Mode::DeviceType | Mode::Runtime | Mode::None => {}
        }
        self.mode = Mode::None;
    }

    fn finish(mut self) -> ParseResult {
        self.leave_mode();
        self.result
    }

    fn flush_group(&mut self) {
        if let Some(group) = self.pending_group.take() {
            self.result.devices.push(group);
        }
    }

    fn parse_device_line(&mut self, line: &str) {
        if line.starts_with(RUNTIME_HEADER_PREFIX) {
            self.flush_group();
            self.pending_group = Some(RuntimeGroup::new(runtime_label(line)));
            return;
        }

        let Some(entry) = match_entry(line) else {
            return;
        };
        // A device line before any runtime header has no group to join.
        if let Some(group) = self.pending_group.as_mut() {
            group.devices.push(DeviceRecord {
                name: entry.name.to_string(),
                id: entry.first.to_string(),
                state: entry.second.to_string(),
                available: entry.available,
            });
        }
    }

    fn parse_device_type_line(&mut self, line: &str) {
        if let Some(record) = match_device_type(line) {
            self.result.devicetypes.push(record);
        }
    }

    fn parse_runtime_line(&mut self, line: &str) {
        if let Some(entry) = match_entry(line) {
            self.result.runtimes.push(RuntimeRecord {
                name: entry.name.to_string(),
                build: entry.first.to_string(),
                id: entry.second.to_string(),
                available: entry.available,
            });
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
