// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed front end for `xcrun simctl`.
//!
//! [`Simctl`] exposes one async method per simctl subcommand and relays the
//! tool's output unchanged. `list` output is turned into structured records,
//! either through the text parser re-exported as [`list_parser`] or by
//! decoding `list -j` into [`JsonListing`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), simctl::SimctlError> {
//! use simctl::{ListOptions, Simctl};
//!
//! let simctl = Simctl::default();
//! simctl.check_prerequisites().await?;
//! let listed = simctl.list(&ListOptions::default()).await?;
//! println!("{:?}", listed.report);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod extensions;
pub mod listing;
pub mod runner;
pub mod simctl;

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod commands;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod output_diagnostic;
#[doc(hidden)]
pub mod testing;

/// Re-exported text parser.
pub use simctl_list_parser as list_parser;

pub use command::{CommandBuilder, Invocation, ListOptions};
pub use config::{ConfigError, Overrides, Settings};
pub use error::SimctlError;
pub use listing::{JsonDevice, JsonListing};
pub use runner::{ProcessRunner, RunOutput, Runner};
pub use simctl::{ListOutput, ListReport, Simctl};
