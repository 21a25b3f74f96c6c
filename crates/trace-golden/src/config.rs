// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags (which clap also fills from environment variables).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;

/// Decoder executable used when nothing else is configured.
pub const DEFAULT_TOOL: &str = "pySim-trace.py";
/// Decoder subcommand that reads a GSMTAP capture.
pub const DEFAULT_SUBCOMMAND: &str = "gsmtap-pyshark-pcap";
/// Capture replayed when nothing else is configured.
pub const DEFAULT_CAPTURE: &str = "pySim-trace_test_gsm_rsap.pcapng";
/// Suffix appended to a capture path to name its golden file.
pub const GOLDEN_SUFFIX: &str = ".ok";

/// Errors that can occur when loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// On-disk shape of a harness config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub tool: Option<PathBuf>,
    #[serde(default)]
    pub subcommand: Option<String>,
    #[serde(default)]
    pub capture: Option<PathBuf>,
    #[serde(default)]
    pub golden: Option<PathBuf>,
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a config file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut file: ConfigFile = toml::from_str(&content)?;

        let base = path.parent().unwrap_or(Path::new("."));
        file.capture = file.capture.map(|p| resolve_relative(base, p));
        file.golden = file.golden.map(|p| resolve_relative(base, p));
        file.scratch_dir = file.scratch_dir.map(|p| resolve_relative(base, p));
        // A bare program name stays bare so it is looked up on PATH.
        file.tool = file.tool.map(|p| {
            if p.components().count() > 1 {
                resolve_relative(base, p)
            } else {
                p
            }
        });

        Ok(file)
    }
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

/// Golden file paired with a capture: `<capture>.ok`, keeping the capture's
/// own extension.
pub fn golden_path_for(capture: &Path) -> PathBuf {
    let mut golden = capture.as_os_str().to_os_string();
    golden.push(GOLDEN_SUFFIX);
    PathBuf::from(golden)
}

/// Everything the runner needs to know, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub tool: PathBuf,
    pub subcommand: String,
    pub capture: PathBuf,
    pub golden: PathBuf,
    /// Directory that receives the transient output file.
    pub scratch_dir: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL, DEFAULT_CAPTURE)
    }
}

impl HarnessConfig {
    /// Config for `tool` replaying `capture`, with the golden file and
    /// scratch directory derived from the capture path.
    pub fn new(tool: impl Into<PathBuf>, capture: impl Into<PathBuf>) -> Self {
        let capture = capture.into();
        let golden = golden_path_for(&capture);
        let scratch_dir = parent_dir(&golden);
        Self {
            tool: tool.into(),
            subcommand: DEFAULT_SUBCOMMAND.to_string(),
            capture,
            golden,
            scratch_dir,
        }
    }

    /// Override the golden path. The scratch directory follows it.
    pub fn with_golden(mut self, golden: impl Into<PathBuf>) -> Self {
        self.golden = golden.into();
        self.scratch_dir = parent_dir(&self.golden);
        self
    }

    pub fn with_subcommand(mut self, subcommand: impl Into<String>) -> Self {
        self.subcommand = subcommand.into();
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    /// Arguments passed to the tool: `<subcommand> -f <capture>`.
    pub fn tool_args(&self) -> Vec<OsString> {
        vec![
            OsString::from(&self.subcommand),
            OsString::from("-f"),
            self.capture.clone().into_os_string(),
        ]
    }

    /// Name used to label results: the capture's file name.
    pub fn label(&self) -> String {
        self.capture
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.capture.display().to_string())
    }

    /// Build the effective config from parsed arguments.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Ok(Self::layer(file, cli))
    }

    fn layer(file: ConfigFile, cli: &Cli) -> Self {
        let tool = cli
            .tool
            .clone()
            .or(file.tool)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL));
        let capture = cli
            .capture
            .clone()
            .or(file.capture)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CAPTURE));

        let mut config = Self::new(tool, capture);
        if let Some(golden) = cli.golden.clone().or(file.golden) {
            config = config.with_golden(golden);
        }
        if let Some(subcommand) = file.subcommand {
            config = config.with_subcommand(subcommand);
        }
        if let Some(dir) = file.scratch_dir {
            config = config.with_scratch_dir(dir);
        }
        config
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
