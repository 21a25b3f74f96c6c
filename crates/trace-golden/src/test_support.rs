// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Fake decoders for unit tests.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `/bin/sh` script into `dir` and return its path.
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// A decoder that echoes its subcommand and prints the capture's content.
pub fn echo_tool(dir: &Path) -> PathBuf {
    fake_tool(
        dir,
        "decoder.sh",
        r#"echo "subcommand: $1"
[ "$2" = "-f" ] || exit 64
cat "$3""#,
    )
}

/// A decoder that prints one line and then exits with `code`.
pub fn failing_tool(dir: &Path, code: i32) -> PathBuf {
    fake_tool(
        dir,
        "crash.sh",
        &format!("echo \"Traceback (most recent call last):\"\nexit {code}"),
    )
}
