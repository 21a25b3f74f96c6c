// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The external trace decoder, driven as an opaque subprocess.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::HarnessError;

const CHUNK_SIZE: usize = 8 * 1024;

/// Everything a finished tool run wrote to stdout, plus how it exited.
#[derive(Debug)]
pub struct Captured {
    pub stdout: Vec<u8>,
    pub status: ExitStatus,
}

/// One configured invocation of the decoder.
#[derive(Debug, Clone)]
pub struct TraceTool {
    program: PathBuf,
    args: Vec<OsString>,
}

impl TraceTool {
    pub fn new(program: impl Into<PathBuf>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(&config.tool, config.tool_args())
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        cmd
    }

    /// Run to completion, collecting all of stdout.
    pub async fn capture(&self) -> Result<Captured, HarnessError> {
        let mut stdout = Vec::new();
        let status = self.tee(&mut tokio::io::sink(), &mut stdout).await?;
        Ok(Captured { stdout, status })
    }

    /// Run to completion, copying stdout into both `echo` and `sink` as it
    /// arrives.
    ///
    /// The returned status is the tool's own, whatever happens to the
    /// writers.
    pub async fn tee<E, S>(&self, echo: &mut E, sink: &mut S) -> Result<ExitStatus, HarnessError>
    where
        E: AsyncWrite + Unpin + ?Sized,
        S: AsyncWrite + Unpin + ?Sized,
    {
        debug!(program = %self.program.display(), args = ?self.args, "spawning trace tool");

        let mut child = self
            .command()
            .spawn()
            .map_err(|source| HarnessError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        let mut stdout = child.stdout.take().ok_or(HarnessError::StdoutUnavailable)?;

        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut total = 0usize;
        loop {
            let n = stdout.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            echo.write_all(&buf[..n]).await?;
            sink.write_all(&buf[..n]).await?;
            total += n;
        }
        echo.flush().await?;
        sink.flush().await?;

        let status = child.wait().await?;
        debug!(bytes = total, %status, "trace tool finished");
        Ok(status)
    }
}

#[cfg(all(test, unix))]
#[path = "tool_tests.rs"]
mod tests;
