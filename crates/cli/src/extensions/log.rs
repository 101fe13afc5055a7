// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Follow a device's system log.
//!
//! The log file is polled rather than watched. Only complete lines are
//! delivered; a trailing partial line is held until its newline arrives.

use std::fmt;
use std::io::{self, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::task::JoinHandle;

use crate::output_diagnostic::{print_debug, print_error};

/// How often the log file is checked for new data
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// `<home>/Library/Logs/CoreSimulator/<udid>/system.log`
pub fn device_log_path(home: &Path, udid: &str) -> PathBuf {
    home.join("Library")
        .join("Logs")
        .join("CoreSimulator")
        .join(udid)
        .join("system.log")
}

/// Where followed lines go.
pub enum LogSink {
    /// Called once per line, without the trailing newline
    Callback(Box<dyn FnMut(&str) + Send>),
    /// Appended to this file, one line per write
    File(PathBuf),
}

impl LogSink {
    pub fn callback(f: impl FnMut(&str) + Send + 'static) -> Self {
        LogSink::Callback(Box::new(f))
    }

    async fn emit(&mut self, line: &str) -> io::Result<()> {
        match self {
            LogSink::Callback(f) => {
                f(line);
                Ok(())
            }
            LogSink::File(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await?;
                file.write_all(format!("{}\n", line).as_bytes()).await?;
                file.flush().await
            }
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::Callback(_) => f.write_str("Callback(..)"),
            LogSink::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}

/// Tails a log file from its current end.
#[derive(Clone, Debug)]
pub struct LogFollower {
    path: PathBuf,
    interval: Duration,
}

impl LogFollower {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Follower for a device's `system.log` under `home`.
    pub fn for_device(home: &Path, udid: &str) -> Self {
        Self::new(device_log_path(home, udid))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start following on the current tokio runtime.
    ///
    /// Lines already in the file when this is called are skipped. A file
    /// that does not exist yet is read from its start once it appears.
    pub fn spawn(self, sink: LogSink) -> LogHandle {
        let offset = std::fs::metadata(&self.path).map_or(0, |m| m.len());
        let task = tokio::spawn(async move {
            let result = self.follow(offset, sink).await;
            if let Err(ref e) = result {
                print_error(format_args!("log follower stopped: {}", e));
            }
            result
        });
        LogHandle {
            task,
            joined: false,
        }
    }

    async fn follow(self, mut offset: u64, mut sink: LogSink) -> io::Result<()> {
        let mut pending: Vec<u8> = Vec::new();
        loop {
            tokio::time::sleep(self.interval).await;

            let len = match tokio::fs::metadata(&self.path).await {
                Ok(metadata) => metadata.len(),
                Err(_) => continue,
            };
            if len < offset {
                print_debug(format_args!("{} was truncated", self.path.display()));
                offset = 0;
                pending.clear();
            }
            if len == offset {
                continue;
            }

            match read_range(&self.path, offset, len).await {
                Ok(chunk) => {
                    offset += chunk.len() as u64;
                    pending.extend_from_slice(&chunk);
                }
                Err(e) => {
                    print_debug(format_args!("reading {}: {}", self.path.display(), e));
                    continue;
                }
            }

            while let Some(end) = pending.iter().position(|&b| b == b'\n') {
                let raw: Vec<u8> = pending.drain(..=end).collect();
                let line = String::from_utf8_lossy(&raw[..end]);
                let line = line.strip_suffix('\r').unwrap_or(&*line);
                sink.emit(line).await?;
            }
        }
    }
}

/// Bytes `[offset, len)` of the file at `path`.
async fn read_range(path: &Path, offset: u64, len: u64) -> io::Result<Vec<u8>> {
    let mut file = File::open(path).await?;
    file.seek(SeekFrom::Start(offset)).await?;
    let mut buf = Vec::new();
    file.take(len.saturating_sub(offset)).read_to_end(&mut buf).await?;
    Ok(buf)
}

/// Handle to a running follower. Dropping it stops the follower.
#[derive(Debug)]
pub struct LogHandle {
    task: JoinHandle<io::Result<()>>,
    joined: bool,
}

impl LogHandle {
    /// Stop following.
    pub fn stop(&self) {
        self.task.abort();
    }

    /// True once the follower has stopped on its own (a sink error).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the follower to end and return its error, if any.
    ///
    /// A stopped follower ends with `Ok(())`. Safe to cancel and call again.
    pub async fn join(&mut self) -> io::Result<()> {
        if self.joined {
            return Ok(());
        }
        let result = (&mut self.task).await;
        self.joined = true;
        match result {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Ok(()),
            Err(e) => Err(io::Error::other(e)),
        }
    }
}

impl Drop for LogHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
