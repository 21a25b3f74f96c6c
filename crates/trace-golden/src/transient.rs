// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scratch file holding one compare run's output.

use std::fs::File;
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Owns the transient output file; dropping it deletes the file.
#[derive(Debug)]
pub struct TransientOutput {
    file: Option<NamedTempFile>,
}

impl TransientOutput {
    /// Create `.<stem>.<random>.log` inside `dir`.
    pub fn create(dir: &Path, stem: &str) -> io::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(&format!(".{stem}."))
            .suffix(".log")
            .tempfile_in(dir)?;
        debug!(path = %file.path().display(), "created transient output");
        Ok(Self { file: Some(file) })
    }

    pub fn path(&self) -> &Path {
        match &self.file {
            Some(file) => file.path(),
            None => Path::new(""),
        }
    }

    /// A second handle for writing, sharing the same underlying file.
    pub fn writer(&self) -> io::Result<File> {
        match &self.file {
            Some(file) => file.as_file().try_clone(),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "transient output already removed",
            )),
        }
    }
}

impl Drop for TransientOutput {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let path = file.path().to_path_buf();
            match file.close() {
                Ok(()) => debug!(path = %path.display(), "removed transient output"),
                Err(e) => warn!(path = %path.display(), error = %e, "failed to remove transient output"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn created_inside_dir_with_stem() {
        let dir = TempDir::new().unwrap();
        let out = TransientOutput::create(dir.path(), "gsm_rsap").unwrap();

        assert_eq!(out.path().parent(), Some(dir.path()));
        let name = out.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".gsm_rsap."), "name: {}", name);
        assert!(name.ends_with(".log"), "name: {}", name);
    }

    #[test]
    fn drop_removes_file() {
        let dir = TempDir::new().unwrap();
        let out = TransientOutput::create(dir.path(), "trace").unwrap();
        let path = out.path().to_path_buf();
        out.writer().unwrap().write_all(b"decoded\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"decoded\n");

        drop(out);
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = TransientOutput::create(&dir.path().join("absent"), "trace").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
