// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file regression harness for trace decoder output.
//!
//! Runs an external trace decoder against a capture file and either
//! regenerates the stored expected output or diffs a fresh run against it.

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;
pub mod tool;
pub mod transient;

#[cfg(all(test, unix))]
mod test_support;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use runner::{exit_codes, Generated, Outcome, Runner};
