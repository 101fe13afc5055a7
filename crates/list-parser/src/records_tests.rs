// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn sample() -> ParseResult {
    ParseResult {
        devices: vec![
            RuntimeGroup {
                runtime: "iOS 10.3".to_string(),
                devices: vec![DeviceRecord {
                    name: "iPhone 7".to_string(),
                    id: "5EFAC0B6-0583-48EA-BDC6-E80FBFF76116".to_string(),
                    state: "Booted".to_string(),
                    available: true,
                }],
            },
            RuntimeGroup {
                runtime: "iOS 7.0".to_string(),
                devices: vec![DeviceRecord {
                    name: "iPhone 4s".to_string(),
                    id: "3717C817-6AD7-42B8-ACF3-405CB9E96375".to_string(),
                    state: "Shutdown".to_string(),
                    available: false,
                }],
            },
        ],
        devicetypes: vec![DeviceTypeRecord {
            name: "iPhone 7".to_string(),
            id: "com.apple.CoreSimulator.SimDeviceType.iPhone-7".to_string(),
        }],
        runtimes: vec![],
    }
}

#[test]
fn default_result_is_empty() {
    assert!(ParseResult::default().is_empty());
    assert!(!sample().is_empty());
}

#[test]
fn all_devices_pairs_runtime_labels() {
    let result = sample();
    let pairs: Vec<(&str, &str)> = result
        .all_devices()
        .map(|(runtime, device)| (runtime, device.name.as_str()))
        .collect();
    assert_eq!(pairs, vec![("iOS 10.3", "iPhone 7"), ("iOS 7.0", "iPhone 4s")]);
}

#[test]
fn find_device_by_udid() {
    let result = sample();
    let device = result
        .find_device("3717C817-6AD7-42B8-ACF3-405CB9E96375")
        .unwrap();
    assert_eq!(device.name, "iPhone 4s");
    assert!(!device.available);
    assert!(result.find_device("missing").is_none());
}

#[test]
fn serializes_with_listing_field_names() {
    let json = serde_json::to_value(sample()).unwrap();
    assert!(json.get("devicetypes").is_some());
    assert_eq!(json["devices"][0]["runtime"], "iOS 10.3");
    assert_eq!(json["devices"][1]["devices"][0]["available"], false);

    let back: ParseResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, sample());
}
