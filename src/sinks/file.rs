//! Append-only file sink

use super::Sink;
use crate::core::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Sink appending entries to a file.
///
/// Writes are serialized by an internal lock so concurrent writers never
/// interleave within a single entry.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Open (or create) the file at `path` for append-only writing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl Sink for FileSink {
    fn write(&self, buf: &[u8]) -> Result<usize> {
        let mut file = self.file.lock();
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "file"
    }
}
