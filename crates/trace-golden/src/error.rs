// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the harness before it can report an outcome.
///
/// A failing tool or a golden mismatch is an [`Outcome`](crate::Outcome),
/// not an error.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to start trace tool '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trace tool stdout was not captured")]
    StdoutUnavailable,

    #[error("Failed to read golden file '{path}' (run with -o to create it): {source}")]
    GoldenRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write golden file '{path}': {source}")]
    GoldenWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
