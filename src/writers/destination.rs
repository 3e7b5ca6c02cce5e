//! Destination handle resolution
//!
//! A destination is an opened file (create/append semantics) or one of the
//! process standard streams. Each destination is exclusively owned by a
//! single writer instance.

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// An opened log destination handle.
#[derive(Debug)]
pub enum Destination {
    File { file: File, path: PathBuf },
    Stdout,
    Stderr,
}

impl Destination {
    /// Open a file destination with create/append semantics.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::destination(path.display().to_string(), e))?;
        Ok(Destination::File { file, path })
    }

    /// Resolve a standard stream by name ("stdout" or "stderr").
    pub fn open_stream(stream: &str) -> Result<Self> {
        match stream {
            "stdout" => Ok(Destination::Stdout),
            "stderr" => Ok(Destination::Stderr),
            other => Err(LoggerError::config(format!(
                "unknown stream \"{}\": expected \"stdout\" or \"stderr\"",
                other
            ))),
        }
    }

    /// Human-readable name of the destination, for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Destination::File { path, .. } => path.display().to_string(),
            Destination::Stdout => "stdout".to_string(),
            Destination::Stderr => "stderr".to_string(),
        }
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Destination::File { file, .. } => file.write(buf),
            Destination::Stdout => io::stdout().lock().write(buf),
            Destination::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::File { file, .. } => file.flush(),
            Destination::Stdout => io::stdout().lock().flush(),
            Destination::Stderr => io::stderr().lock().flush(),
        }
    }
}
