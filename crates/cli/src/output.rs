// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-facing output: diagnostics, the transient status line, and
//! human-readable size/time formatting.
//!
//! Diagnostics go to stderr with ANSI color under a terminal. Countdown and
//! recording progress are written as a single line overwritten in place, so
//! an hour-long capture does not scroll the terminal.

use std::io::{self, IsTerminal, Write};

use chrono::{DateTime, Local};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// A single terminal line rewritten in place.
///
/// Each update returns the cursor to column zero and pads with spaces to
/// cover whatever the previous, possibly longer, message left behind.
pub struct StatusLine<W: Write> {
    writer: W,
    last_len: usize,
}

impl<W: Write> StatusLine<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_len: 0,
        }
    }

    /// Overwrite the line with `msg`.
    pub fn update(&mut self, msg: &str) -> io::Result<()> {
        let len = msg.chars().count();
        let pad = self.last_len.saturating_sub(len);
        write!(self.writer, "\r{}{}", msg, " ".repeat(pad))?;
        self.writer.flush()?;
        self.last_len = len;
        Ok(())
    }

    /// Wipe the line and return the cursor to column zero.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.last_len > 0 {
            write!(self.writer, "\r{}\r", " ".repeat(self.last_len))?;
            self.writer.flush()?;
            self.last_len = 0;
        }
        Ok(())
    }

    /// Consume the status line, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render a file size, megabytes above 1 MiB and kilobytes otherwise.
pub fn format_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes > MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    }
}

/// Render remaining seconds as `Xm Ys` above one minute, `Zs` below.
pub fn format_remaining(secs: u64) -> String {
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

/// Render a capture duration for the banner: whole minutes, or seconds for
/// sub-minute test runs.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{} seconds", secs)
    } else if secs / 60 == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", secs / 60)
    }
}

/// Render a wall-clock instant as `HH:MM:SS`.
pub fn format_clock(at: DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
