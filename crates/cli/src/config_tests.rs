// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_settings(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.xcrun, "xcrun");
    assert!(!settings.noxpc);
    assert!(settings.device_set.is_none());
    assert!(settings.timeout().is_none());
    assert!(!settings.verbose);
}

#[test]
fn load_full_file() {
    let file = write_settings(
        r#"
        xcrun = "/usr/local/bin/xcrun"
        noxpc = true
        device_set = "/tmp/devices"
        timeout_ms = 30000
        verbose = true
        "#,
    );

    let overrides = Overrides::load(file.path()).unwrap();
    assert_eq!(overrides.xcrun.as_deref(), Some("/usr/local/bin/xcrun"));
    assert_eq!(overrides.noxpc, Some(true));
    assert_eq!(overrides.device_set, Some(PathBuf::from("/tmp/devices")));
    assert_eq!(overrides.timeout_ms, Some(30000));
    assert_eq!(overrides.verbose, Some(true));
}

#[test]
fn load_rejects_unknown_fields() {
    let file = write_settings("xcrun = \"xcrun\"\ncolour = \"blue\"\n");
    let err = Overrides::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn load_missing_file_reports_path() {
    let err = Overrides::load(Path::new("/nonexistent/simctl.toml")).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/simctl.toml")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn later_layers_win() {
    let file = write_settings("xcrun = \"/from/file\"\ntimeout_ms = 1000\nnoxpc = true\n");
    let env = Overrides {
        xcrun: Some("/from/env".into()),
        timeout_ms: Some(2000),
        ..Default::default()
    };
    let cli = Overrides {
        timeout_ms: Some(3000),
        ..Default::default()
    };

    let settings = Settings::resolve(Some(file.path()), &env, &cli).unwrap();
    assert_eq!(settings.xcrun, "/from/env");
    assert_eq!(settings.timeout_ms, Some(3000));
    assert!(settings.noxpc);
}

#[test]
fn unset_layer_fields_keep_lower_values() {
    let mut settings = Settings {
        device_set: Some(PathBuf::from("/set")),
        verbose: true,
        ..Default::default()
    };
    settings.apply(&Overrides::default());
    assert_eq!(settings.device_set, Some(PathBuf::from("/set")));
    assert!(settings.verbose);
}

#[test]
fn explicit_false_overrides_true() {
    let mut settings = Settings {
        noxpc: true,
        ..Default::default()
    };
    settings.apply(&Overrides {
        noxpc: Some(false),
        ..Default::default()
    });
    assert!(!settings.noxpc);
}

#[test]
fn zero_timeout_is_rejected() {
    let cli = Overrides {
        timeout_ms: Some(0),
        ..Default::default()
    };
    let err = Settings::resolve(None, &Overrides::default(), &cli).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn empty_xcrun_is_rejected() {
    let cli = Overrides {
        xcrun: Some("  ".into()),
        ..Default::default()
    };
    let err = Settings::resolve(None, &Overrides::default(), &cli).unwrap_err();
    assert!(err.to_string().contains("xcrun"));
}

#[test]
fn timeout_converts_to_duration() {
    let settings = Settings {
        timeout_ms: Some(1500),
        ..Default::default()
    };
    assert_eq!(settings.timeout(), Some(Duration::from_millis(1500)));
}
