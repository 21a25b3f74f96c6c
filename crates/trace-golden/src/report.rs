// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal text: result lines, separator markers, and stderr diagnostics.

use std::io::{self, IsTerminal, Write};

use crate::runner::Outcome;

/// Marker line bracketing echoed output and diffs.
pub const SEPARATOR: &str = "------------8<------------";

/// `content` between separator lines, newline-terminated.
pub fn bracketed(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + 2 * (SEPARATOR.len() + 1) + 1);
    out.extend_from_slice(SEPARATOR.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(content);
    if !content.is_empty() && !content.ends_with(b"\n") {
        out.push(b'\n');
    }
    out.extend_from_slice(SEPARATOR.as_bytes());
    out.push(b'\n');
    out
}

/// Result text for a compare run.
pub fn render_outcome(label: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Passed => format!("{label}: everything ok\n"),
        Outcome::ToolFailed { .. } => format!("{label}: failed (exception)\n"),
        Outcome::Mismatch { diff } => {
            let body = String::from_utf8_lossy(&bracketed(diff.as_bytes())).into_owned();
            format!("{label}: failed (unexpected output)\n{body}")
        }
    }
}

/// Print an error message to stderr, red when stderr is a terminal.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr, yellow when stderr is a terminal.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
