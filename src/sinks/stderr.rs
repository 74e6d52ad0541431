//! Standard error sink

use super::Sink;
use crate::core::error::Result;
use std::io::Write;

/// Sink writing entries to the process's standard error stream.
#[derive(Debug, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write(&self, buf: &[u8]) -> Result<usize> {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(buf)?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
