// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface for the harness.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};

use crate::runner::exit_codes;

/// Golden-file regression test for trace decoder output
#[derive(Parser, Debug, Clone)]
#[command(
    name = "trace-golden",
    about = "Run the trace decoder against a capture and compare with its golden output"
)]
pub struct Cli {
    /// Regenerate the golden file instead of comparing against it
    #[arg(short = 'o', long = "generate")]
    pub generate: bool,

    /// Harness config file (TOML)
    #[arg(long, env = "TRACE_GOLDEN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Trace decoder executable
    #[arg(long, env = "TRACE_GOLDEN_TOOL", value_name = "PATH")]
    pub tool: Option<PathBuf>,

    /// Capture file handed to the decoder
    #[arg(long, env = "TRACE_GOLDEN_CAPTURE", value_name = "PATH")]
    pub capture: Option<PathBuf>,

    /// Expected-output file (defaults to the capture path with an `.ok` extension)
    #[arg(long, env = "TRACE_GOLDEN_EXPECTED", value_name = "PATH")]
    pub golden: Option<PathBuf>,

    /// Diagnostic verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Result of parsing the command line.
///
/// Help and invalid flags are resolved here so that neither path ever
/// reaches the runner.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// Usage text destined for stdout.
    Help(String),
    /// Message destined for stderr.
    Invalid(String),
}

impl Invocation {
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Self::Run(cli),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Self::Help(err.render().to_string())
                }
                ErrorKind::UnknownArgument => Self::Invalid(
                    invalid_option_message(&err).unwrap_or_else(|| rendered_error(&err)),
                ),
                _ => Self::Invalid(rendered_error(&err)),
            },
        }
    }

    /// Exit code for the non-running variants.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Run(_) => None,
            Self::Help(_) => Some(exit_codes::SUCCESS),
            Self::Invalid(_) => Some(exit_codes::FAILURE),
        }
    }

    /// Write help to `out` or the rejection message to `err`.
    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        match self {
            Self::Run(_) => Ok(()),
            Self::Help(usage) => {
                write!(out, "{usage}")?;
                out.flush()
            }
            Self::Invalid(msg) => writeln!(err, "{msg}"),
        }
    }
}

/// `Invalid option: -x` for an unrecognised flag; `None` for a stray
/// positional, which is not a flag at all.
fn invalid_option_message(err: &clap::Error) -> Option<String> {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) if arg.starts_with('-') => {
            Some(format!("Invalid option: {arg}"))
        }
        _ => None,
    }
}

fn rendered_error(err: &clap::Error) -> String {
    err.render().to_string().trim_end().to_string()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
