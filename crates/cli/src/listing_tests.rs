// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

const FIXTURE: &str = include_str!("../tests/fixtures/list.json");

fn fixture() -> JsonListing {
    serde_json::from_str(FIXTURE).unwrap()
}

#[test]
fn parses_xcode_13_listing() {
    let listing = fixture();
    assert_eq!(listing.devicetypes.len(), 2);
    assert_eq!(listing.devicetypes[0].product_family.as_deref(), Some("iPhone"));
    assert_eq!(listing.runtimes[0].buildversion, "19C51");
    assert!(listing.runtimes[0].available());
    assert_eq!(listing.devices.len(), 2);
    assert_eq!(listing.pairs.len(), 1);
}

#[test]
fn find_device_across_runtimes() {
    let listing = fixture();

    let booted = listing
        .find_device("5EFAC0B6-0583-48EA-BDC6-E80FBFF76116")
        .unwrap();
    assert!(booted.is_booted());
    assert_eq!(
        booted.device_type_identifier.as_deref(),
        Some("com.apple.CoreSimulator.SimDeviceType.iPhone-13")
    );

    let unavailable = listing
        .find_device("3717C817-6AD7-42B8-ACF3-405CB9E96375")
        .unwrap();
    assert!(!unavailable.available());
    assert_eq!(
        unavailable.availability_error.as_deref(),
        Some("runtime profile not found")
    );

    assert!(listing.find_device("missing").is_none());
}

#[test]
fn all_devices_carries_runtime_keys() {
    let listing = fixture();
    let runtimes: Vec<&str> = listing.all_devices().map(|(runtime, _)| runtime).collect();
    // BTreeMap order: iOS-12-0 sorts before iOS-15-2
    assert_eq!(
        runtimes,
        vec![
            "com.apple.CoreSimulator.SimRuntime.iOS-12-0",
            "com.apple.CoreSimulator.SimRuntime.iOS-15-2",
            "com.apple.CoreSimulator.SimRuntime.iOS-15-2",
        ]
    );
}

#[test]
fn legacy_availability_string() {
    let listing: JsonListing = serde_json::from_str(
        r#"{
            "devices": {
                "iOS 10.3": [
                    { "state": "Shutdown", "availability": "(available)", "name": "iPhone 7", "udid": "A" },
                    { "state": "Shutdown", "availability": "(unavailable, runtime profile not found)", "name": "iPhone 4s", "udid": "B" }
                ]
            }
        }"#,
    )
    .unwrap();

    assert!(listing.find_device("A").unwrap().available());
    assert!(!listing.find_device("B").unwrap().available());
    assert!(listing.runtimes.is_empty());
    assert!(listing.pairs.is_empty());
}

#[test]
fn empty_document() {
    let listing: JsonListing = serde_json::from_str("{}").unwrap();
    assert_eq!(listing, JsonListing::default());
}
