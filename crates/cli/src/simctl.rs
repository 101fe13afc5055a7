// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One method per simctl subcommand.
//!
//! Pass-through methods return the raw [`RunOutput`]; a non-zero exit status
//! is left for the caller to inspect. Only helpers that need a successful run
//! (such as [`Simctl::list_json`]) turn it into an error.

use serde::Serialize;
use std::path::Path;

use crate::command::{CommandBuilder, Invocation, ListOptions};
use crate::config::Settings;
use crate::error::SimctlError;
use crate::listing::JsonListing;
use crate::output_diagnostic::print_debug;
use crate::runner::{ProcessRunner, RunOutput, Runner};
use simctl_list_parser::ParseResult;

/// Structured form of a `list` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListReport {
    /// Parsed text report
    Text(ParseResult),
    /// Raw `-j` document
    Json(serde_json::Value),
}

/// Output of a `list` call plus its structured report.
#[derive(Clone, Debug, PartialEq)]
pub struct ListOutput {
    pub output: RunOutput,
    /// `None` when the command exited non-zero
    pub report: Option<ListReport>,
}

/// Typed front end for `xcrun simctl`.
#[derive(Clone, Debug)]
pub struct Simctl<R = ProcessRunner> {
    builder: CommandBuilder,
    runner: R,
}

impl Simctl<ProcessRunner> {
    /// Build a client that spawns real processes.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            CommandBuilder::from_settings(settings),
            ProcessRunner::new().with_timeout(settings.timeout()),
        )
    }
}

impl Default for Simctl<ProcessRunner> {
    fn default() -> Self {
        Self::new(CommandBuilder::default(), ProcessRunner::new())
    }
}

impl<R: Runner> Simctl<R> {
    pub fn new(builder: CommandBuilder, runner: R) -> Self {
        Self { builder, runner }
    }

    pub fn builder(&self) -> &CommandBuilder {
        &self.builder
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run any invocation through this client's runner.
    pub async fn run(&self, invocation: &Invocation) -> Result<RunOutput, SimctlError> {
        print_debug(format_args!("running {}", invocation));
        let output = self.runner.run(invocation).await?;
        print_debug(format_args!("exit status {}", output.status));
        Ok(output)
    }

    /// Verify that simctl can be run at all.
    pub async fn check_prerequisites(&self) -> Result<(), SimctlError> {
        match self.run(&self.builder.help(None)).await {
            Ok(output) if output.success() => Ok(()),
            Ok(_) | Err(SimctlError::Spawn { .. }) => Err(SimctlError::NotFound),
            Err(e) => Err(e),
        }
    }

    pub async fn help(&self, subcommand: Option<&str>) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.help(subcommand)).await
    }

    pub async fn create(
        &self,
        name: &str,
        device_type_id: &str,
        runtime_id: &str,
    ) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.create(name, device_type_id, runtime_id))
            .await
    }

    pub async fn delete(&self, device: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.delete(device)).await
    }

    pub async fn erase(&self, device: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.erase(device)).await
    }

    pub async fn boot(&self, device: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.boot(device)).await
    }

    pub async fn shutdown(&self, device: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.shutdown(device)).await
    }

    pub async fn rename(&self, device: &str, name: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.rename(device, name)).await
    }

    pub async fn getenv(&self, device: &str, variable: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.getenv(device, variable)).await
    }

    pub async fn openurl(&self, device: &str, url: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.openurl(device, url)).await
    }

    pub async fn addphoto(&self, device: &str, path: &Path) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.addphoto(device, path)).await
    }

    pub async fn install(&self, device: &str, path: &Path) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.install(device, path)).await
    }

    pub async fn uninstall(&self, device: &str, bundle_id: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.uninstall(device, bundle_id)).await
    }

    pub async fn launch(
        &self,
        wait_for_debugger: bool,
        device: &str,
        bundle_id: &str,
        argv: &[String],
    ) -> Result<RunOutput, SimctlError> {
        self.run(
            &self
                .builder
                .launch(wait_for_debugger, device, bundle_id, argv),
        )
        .await
    }

    pub async fn spawn(
        &self,
        wait_for_debugger: bool,
        arch: Option<&str>,
        device: &str,
        executable: &Path,
        argv: &[String],
    ) -> Result<RunOutput, SimctlError> {
        self.run(
            &self
                .builder
                .spawn(wait_for_debugger, arch, device, executable, argv),
        )
        .await
    }

    pub async fn notify_post(
        &self,
        device: &str,
        notification_name: &str,
    ) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.notify_post(device, notification_name))
            .await
    }

    pub async fn icloud_sync(&self, device: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.icloud_sync(device)).await
    }

    pub async fn pair(&self, watch: &str, phone: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.pair(watch, phone)).await
    }

    pub async fn unpair(&self, pair_id: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.unpair(pair_id)).await
    }

    pub async fn pair_activate(&self, pair_id: &str) -> Result<RunOutput, SimctlError> {
        self.run(&self.builder.pair_activate(pair_id)).await
    }

    /// Run `list` and parse whichever format was requested.
    pub async fn list(&self, options: &ListOptions) -> Result<ListOutput, SimctlError> {
        let output = self.run(&self.builder.list(options)).await?;
        let report = if !output.success() {
            None
        } else if options.json {
            Some(ListReport::Json(serde_json::from_str(&output.stdout)?))
        } else {
            Some(ListReport::Text(simctl_list_parser::parse(&output.stdout)))
        };
        Ok(ListOutput { output, report })
    }

    /// Run `list -j` and decode the full document.
    pub async fn list_json(&self) -> Result<JsonListing, SimctlError> {
        let invocation = self.builder.list(&ListOptions::json());
        let output = self.run(&invocation).await?.ensure_success(&invocation)?;
        Ok(serde_json::from_str(&output.stdout)?)
    }
}

#[cfg(test)]
#[path = "simctl_tests.rs"]
mod tests;
