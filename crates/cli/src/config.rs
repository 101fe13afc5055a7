// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings for locating and invoking simctl.
//!
//! Resolution order, lowest to highest precedence: built-in defaults, the
//! TOML settings file, environment variables, command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::env;

/// Default program used to reach simctl
pub const DEFAULT_XCRUN: &str = "xcrun";

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid settings: {0}")]
    Validation(String),
}

/// One layer of optional settings.
///
/// This is both the shape of the TOML file and the shape of the environment
/// and command-line layers applied on top of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    /// Program used in place of `xcrun`
    #[serde(default)]
    pub xcrun: Option<String>,

    /// Pass `--noxpc` before every subcommand
    #[serde(default)]
    pub noxpc: Option<bool>,

    /// Device set directory, passed as `--set <path>`
    #[serde(default)]
    pub device_set: Option<PathBuf>,

    /// Kill commands that run longer than this
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Print every command before running it
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl Overrides {
    /// Load a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Read the `SIMCTL_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            xcrun: env::xcrun(),
            noxpc: env::noxpc(),
            device_set: env::device_set(),
            timeout_ms: env::timeout_ms(),
            verbose: env::verbose(),
        }
    }
}

/// Fully resolved settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub xcrun: String,
    pub noxpc: bool,
    pub device_set: Option<PathBuf>,
    pub timeout_ms: Option<u64>,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            xcrun: DEFAULT_XCRUN.to_string(),
            noxpc: false,
            device_set: None,
            timeout_ms: None,
            verbose: false,
        }
    }
}

impl Settings {
    /// Resolve settings from an optional file plus the environment and
    /// command-line layers.
    pub fn resolve(
        config_path: Option<&Path>,
        env: &Overrides,
        cli: &Overrides,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if let Some(path) = config_path {
            settings.apply(&Overrides::load(path)?);
        }
        settings.apply(env);
        settings.apply(cli);
        settings.validate()?;
        Ok(settings)
    }

    /// Apply every field that is set in `overrides`.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(ref xcrun) = overrides.xcrun {
            self.xcrun = xcrun.clone();
        }
        if let Some(noxpc) = overrides.noxpc {
            self.noxpc = noxpc;
        }
        if let Some(ref set) = overrides.device_set {
            self.device_set = Some(set.clone());
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.timeout_ms = Some(timeout_ms);
        }
        if let Some(verbose) = overrides.verbose {
            self.verbose = verbose;
        }
    }

    /// Reject settings no command could run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.xcrun.trim().is_empty() {
            return Err(ConfigError::Validation("xcrun must not be empty".into()));
        }
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Validation(
                "timeout_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Command timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
