// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics on stderr.
//!
//! Errors and warnings are always shown, colored when stderr is a terminal.
//! Debug lines only appear once verbose output is switched on.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable `print_debug` output for the whole process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
    Debug,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Debug => "debug",
        }
    }

    /// ANSI color code, if the level is colored at all.
    fn color(self) -> Option<&'static str> {
        match self {
            Level::Error => Some("31"),
            Level::Warning => Some("33"),
            Level::Debug => None,
        }
    }
}

/// Print an error message to stderr, in red on a terminal.
pub fn print_error(msg: impl Display) {
    emit(Level::Error, msg);
}

/// Print a warning message to stderr, in yellow on a terminal.
pub fn print_warning(msg: impl Display) {
    emit(Level::Warning, msg);
}

/// Print a debug message to stderr when verbose output is enabled.
pub fn print_debug(msg: impl Display) {
    if is_verbose() {
        emit(Level::Debug, msg);
    }
}

fn emit(level: Level, msg: impl Display) {
    let mut stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr, level, msg, is_tty);
}

fn write_diagnostic<W: Write>(writer: &mut W, level: Level, msg: impl Display, is_terminal: bool) {
    let _ = match level.color().filter(|_| is_terminal) {
        Some(color) => writeln!(writer, "\x1b[{}m{}: {}\x1b[0m", color, level.label(), msg),
        None => writeln!(writer, "{}: {}", level.label(), msg),
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
