// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch a parsed command line.

use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::{ConfigError, Overrides, Settings};
use crate::env;
use crate::error::SimctlError;
use crate::extensions::{start, LogFollower, LogSink, StartError};
use crate::output_diagnostic::set_verbose;
use crate::runner::{RunOutput, Runner};
use crate::simctl::Simctl;

/// Errors surfaced by the binary as `Error: <message>`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Simctl(#[from] SimctlError),

    #[error(transparent)]
    Start(#[from] StartError),

    #[error("Failed to read {name}: {source}")]
    Input {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HOME is not set; cannot locate device logs")]
    NoHome,
}

/// Run the command line and return the process exit code.
pub async fn execute(cli: &Cli) -> Result<i32, CliError> {
    // parse never runs the tool, so a broken settings file must not stop it
    let settings = match cli.command {
        Command::Parse { .. } => Settings::default(),
        _ => resolve_settings(&cli.global)?,
    };
    set_verbose(settings.verbose);

    let simctl = Simctl::from_settings(&settings);
    run_command(&simctl, &cli.command, &mut io::stdout(), &mut io::stderr()).await
}

/// Layer the settings file, environment and flags.
pub fn resolve_settings(global: &GlobalArgs) -> Result<Settings, ConfigError> {
    let config_path = global.config.clone().or_else(env::config_path);
    Settings::resolve(
        config_path.as_deref(),
        &Overrides::from_env(),
        &global.overrides(),
    )
}

/// Run one command, writing its output to `out` and `err`.
///
/// Pass-through subcommands relay the tool's output and exit status.
pub async fn run_command<R, W, E>(
    simctl: &Simctl<R>,
    command: &Command,
    out: &mut W,
    err: &mut E,
) -> Result<i32, CliError>
where
    R: Runner,
    W: Write,
    E: Write,
{
    let output = match command {
        Command::Check => {
            simctl.check_prerequisites().await?;
            writeln!(out, "simctl is available").map_err(CliError::Output)?;
            return Ok(0);
        }
        Command::List(args) => {
            let listed = simctl.list(&args.options()).await?;
            let Some(report) = listed.report else {
                return relay(&listed.output, out, err);
            };
            write_json(out, &report)?;
            err.write_all(listed.output.stderr.as_bytes())
                .map_err(CliError::Output)?;
            return Ok(0);
        }
        Command::Parse { file } => {
            let text = read_listing(file.as_deref())?;
            write_json(out, &simctl_list_parser::parse(&text))?;
            return Ok(0);
        }
        Command::Start { udid } => start(simctl, udid).await?,
        Command::Log { udid, output } => return follow_log(udid, output.as_deref()).await,
        Command::Help { subcommand } => simctl.help(subcommand.as_deref()).await?,
        Command::Create {
            name,
            device_type_id,
            runtime_id,
        } => simctl.create(name, device_type_id, runtime_id).await?,
        Command::Delete { device } => simctl.delete(device).await?,
        Command::Erase { device } => simctl.erase(device).await?,
        Command::Boot { device } => simctl.boot(device).await?,
        Command::Shutdown { device } => simctl.shutdown(device).await?,
        Command::Rename { device, name } => simctl.rename(device, name).await?,
        Command::Getenv { device, variable } => simctl.getenv(device, variable).await?,
        Command::Openurl { device, url } => simctl.openurl(device, url).await?,
        Command::Addphoto { device, path } => simctl.addphoto(device, path).await?,
        Command::Install { device, path } => simctl.install(device, path).await?,
        Command::Uninstall { device, bundle_id } => simctl.uninstall(device, bundle_id).await?,
        Command::Launch {
            wait_for_debugger,
            device,
            bundle_id,
            argv,
        } => {
            simctl
                .launch(*wait_for_debugger, device, bundle_id, argv)
                .await?
        }
        Command::Spawn {
            wait_for_debugger,
            arch,
            device,
            executable,
            argv,
        } => {
            simctl
                .spawn(*wait_for_debugger, arch.as_deref(), device, executable, argv)
                .await?
        }
        Command::NotifyPost {
            device,
            notification_name,
        } => simctl.notify_post(device, notification_name).await?,
        Command::IcloudSync { device } => simctl.icloud_sync(device).await?,
        Command::Pair { watch, phone } => simctl.pair(watch, phone).await?,
        Command::Unpair { pair_id } => simctl.unpair(pair_id).await?,
        Command::PairActivate { pair_id } => simctl.pair_activate(pair_id).await?,
    };
    relay(&output, out, err)
}

/// Copy the tool's output through and hand back its status.
fn relay(output: &RunOutput, out: &mut impl Write, err: &mut impl Write) -> Result<i32, CliError> {
    out.write_all(output.stdout.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::Output)?;
    err.write_all(output.stderr.as_bytes())
        .and_then(|()| err.flush())
        .map_err(CliError::Output)?;
    Ok(output.status)
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", json).map_err(CliError::Output)
}

fn read_listing(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Input {
            name: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Input {
                    name: "stdin".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}

/// Print or copy log lines until Ctrl+C.
///
/// Exits 1 when the follower stops on its own; the follower has already
/// reported why.
async fn follow_log(udid: &str, output: Option<&Path>) -> Result<i32, CliError> {
    let home = env::home().ok_or(CliError::NoHome)?;
    let sink = match output {
        Some(path) => LogSink::File(path.to_path_buf()),
        None => LogSink::callback(|line| println!("{}", line)),
    };

    let mut handle = LogFollower::for_device(&home, udid).spawn(sink);
    let interrupted = tokio::select! {
        signal = tokio::signal::ctrl_c() => Some(signal),
        _ = handle.join() => None,
    };
    handle.stop();
    match interrupted {
        Some(signal) => {
            signal.map_err(CliError::Output)?;
            Ok(0)
        }
        None => Ok(1),
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
