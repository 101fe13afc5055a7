// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::io::Write;
use std::sync::mpsc;
use tempfile::TempDir;

const FAST: Duration = Duration::from_millis(10);
const WAIT: Duration = Duration::from_secs(5);

fn append(path: &Path, text: &str) {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    file.write_all(text.as_bytes()).unwrap();
}

fn channel_sink() -> (LogSink, mpsc::Receiver<String>) {
    let (tx, rx) = mpsc::channel();
    let sink = LogSink::callback(move |line| {
        let _ = tx.send(line.to_string());
    });
    (sink, rx)
}

async fn next_line(rx: &mpsc::Receiver<String>) -> String {
    let deadline = tokio::time::Instant::now() + WAIT;
    loop {
        if let Ok(line) = rx.try_recv() {
            return line;
        }
        assert!(tokio::time::Instant::now() < deadline, "no line received");
        tokio::time::sleep(FAST).await;
    }
}

#[test]
fn device_log_path_layout() {
    let path = device_log_path(Path::new("/Users/me"), "ABC-123");
    assert_eq!(
        path,
        PathBuf::from("/Users/me/Library/Logs/CoreSimulator/ABC-123/system.log")
    );
}

#[test]
fn follower_defaults() {
    let follower = LogFollower::for_device(Path::new("/home"), "UDID");
    assert_eq!(follower.interval, DEFAULT_POLL_INTERVAL);
    assert!(follower.path().ends_with("CoreSimulator/UDID/system.log"));

    let follower = follower.with_interval(FAST);
    assert_eq!(follower.interval, FAST);
}

#[tokio::test]
async fn skips_existing_content_and_relays_new_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");
    append(&path, "old line\n");

    let (sink, rx) = channel_sink();
    let handle = LogFollower::new(&path).with_interval(FAST).spawn(sink);

    append(&path, "first\nsecond\n");
    assert_eq!(next_line(&rx).await, "first");
    assert_eq!(next_line(&rx).await, "second");

    handle.stop();
}

#[tokio::test]
async fn holds_partial_lines_until_complete() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");
    append(&path, "");

    let (sink, rx) = channel_sink();
    let handle = LogFollower::new(&path).with_interval(FAST).spawn(sink);

    append(&path, "hel");
    tokio::time::sleep(FAST * 5).await;
    assert!(rx.try_recv().is_err());

    append(&path, "lo\r\n");
    assert_eq!(next_line(&rx).await, "hello");

    handle.stop();
}

#[tokio::test]
async fn waits_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");

    let (sink, rx) = channel_sink();
    let handle = LogFollower::new(&path).with_interval(FAST).spawn(sink);

    tokio::time::sleep(FAST * 3).await;
    append(&path, "booted\n");
    assert_eq!(next_line(&rx).await, "booted");

    handle.stop();
}

#[tokio::test]
async fn truncation_restarts_from_beginning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");
    append(&path, "a fairly long line that was there before\n");

    let (sink, rx) = channel_sink();
    let handle = LogFollower::new(&path).with_interval(FAST).spawn(sink);

    std::fs::write(&path, "new\n").unwrap();
    assert_eq!(next_line(&rx).await, "new");

    handle.stop();
}

#[tokio::test]
async fn file_sink_appends_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");
    let out = dir.path().join("copy.log");
    append(&path, "");
    append(&out, "kept\n");

    let handle = LogFollower::new(&path)
        .with_interval(FAST)
        .spawn(LogSink::File(out.clone()));

    append(&path, "one\ntwo\n");
    let deadline = tokio::time::Instant::now() + WAIT;
    loop {
        let copied = std::fs::read_to_string(&out).unwrap();
        if copied == "kept\none\ntwo\n" {
            break;
        }
        assert!(tokio::time::Instant::now() < deadline, "copied: {:?}", copied);
        tokio::time::sleep(FAST).await;
    }

    handle.stop();
}

#[tokio::test]
async fn sink_error_stops_follower() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");
    append(&path, "");

    let sink = LogSink::File(dir.path().join("missing").join("copy.log"));
    let mut handle = LogFollower::new(&path).with_interval(FAST).spawn(sink);

    append(&path, "line\n");
    let result = tokio::time::timeout(WAIT, handle.join()).await.unwrap();
    assert!(result.is_err());
    assert!(handle.is_finished());
}

#[tokio::test]
async fn stopped_follower_joins_cleanly() {
    let dir = TempDir::new().unwrap();
    let (sink, _rx) = channel_sink();
    let mut handle = LogFollower::new(dir.path().join("system.log"))
        .with_interval(FAST)
        .spawn(sink);
    assert!(!handle.is_finished());
    handle.stop();
    assert!(handle.join().await.is_ok());
    assert!(handle.is_finished());
    assert!(handle.join().await.is_ok());
}

#[test]
fn sink_debug_hides_callback() {
    let (sink, _rx) = channel_sink();
    assert_eq!(format!("{:?}", sink), "Callback(..)");
    let sink = LogSink::File(PathBuf::from("/tmp/x.log"));
    assert_eq!(format!("{:?}", sink), "File(\"/tmp/x.log\")");
}

#[tokio::test]
async fn dropping_handle_stops_follower() {
    let dir = TempDir::new().unwrap();
    let (sink, _rx) = channel_sink();
    let handle = LogFollower::new(dir.path().join("never-created.log"))
        .with_interval(FAST)
        .spawn(sink);
    let task = handle.task.abort_handle();
    drop(handle);

    let deadline = tokio::time::Instant::now() + WAIT;
    while !task.is_finished() {
        assert!(tokio::time::Instant::now() < deadline, "follower still running");
        tokio::time::sleep(FAST).await;
    }
}
