// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generate and compare modes.

use std::process::ExitStatus;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::diff::golden_diff;
use crate::error::HarnessError;
use crate::report::bracketed;
use crate::tool::TraceTool;
use crate::transient::TransientOutput;

/// Process exit codes
pub mod exit_codes {
    /// Comparison passed, golden file regenerated, or help shown
    pub const SUCCESS: i32 = 0;
    /// Tool failure, output mismatch, bad flag, or harness error
    pub const FAILURE: i32 = 1;
}

/// Result of a compare run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The tool exited non-zero; `code` is `None` if a signal killed it.
    ToolFailed { code: Option<i32> },
    /// Unified diff from golden to actual output.
    Mismatch { diff: String },
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed => exit_codes::SUCCESS,
            Self::ToolFailed { .. } | Self::Mismatch { .. } => exit_codes::FAILURE,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Result of a generate run.
#[derive(Debug)]
pub struct Generated {
    /// Bytes written to the golden file.
    pub bytes: usize,
    pub status: ExitStatus,
}

pub struct Runner {
    config: HarnessConfig,
}

impl Runner {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    fn tool(&self) -> TraceTool {
        TraceTool::from_config(&self.config)
    }

    /// Rewrite the golden file from a fresh tool run and echo what was
    /// written, bracketed by separators.
    ///
    /// The tool is trusted here: a non-zero exit is logged, and whatever it
    /// printed still becomes the golden file.
    pub async fn generate<W>(&self, echo: &mut W) -> Result<Generated, HarnessError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let captured = self.tool().capture().await?;
        if !captured.status.success() {
            info!(status = %captured.status, "trace tool exited unsuccessfully while generating");
        }

        let golden = &self.config.golden;
        tokio::fs::write(golden, &captured.stdout)
            .await
            .map_err(|source| HarnessError::GoldenWrite {
                path: golden.clone(),
                source,
            })?;
        info!(path = %golden.display(), bytes = captured.stdout.len(), "wrote golden file");

        echo.write_all(&bracketed(&captured.stdout)).await?;
        echo.flush().await?;

        Ok(Generated {
            bytes: captured.stdout.len(),
            status: captured.status,
        })
    }

    /// Run the tool with its output teed to `echo` and a transient file, then
    /// compare the transient file against the golden file.
    ///
    /// The transient file is gone by the time this returns, on every path.
    pub async fn compare<W>(&self, echo: &mut W) -> Result<Outcome, HarnessError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let transient = TransientOutput::create(&self.config.scratch_dir, &self.config.label())?;

        let status = {
            let mut sink = tokio::fs::File::from_std(transient.writer()?);
            self.tool().tee(echo, &mut sink).await?
        };

        if !status.success() {
            debug!(%status, "trace tool failed");
            return Ok(Outcome::ToolFailed {
                code: status.code(),
            });
        }

        let golden = &self.config.golden;
        let expected = tokio::fs::read(golden)
            .await
            .map_err(|source| HarnessError::GoldenRead {
                path: golden.clone(),
                source,
            })?;
        let actual = tokio::fs::read(transient.path()).await?;

        let expected_label = golden.display().to_string();
        let actual_label = transient.path().display().to_string();
        let outcome = match golden_diff(&expected, &actual, (&expected_label, &actual_label)) {
            None => Outcome::Passed,
            Some(diff) => Outcome::Mismatch { diff },
        };
        debug!(pass = outcome.is_pass(), "comparison finished");
        Ok(outcome)
    }
}

#[cfg(all(test, unix))]
#[path = "runner_tests.rs"]
mod tests;
