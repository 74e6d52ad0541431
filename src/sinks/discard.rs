//! Discard sink for throughput benchmarking

use super::Sink;
use crate::core::error::Result;

/// Sink that reports every write as fully successful without storing anything.
#[derive(Debug, Default)]
pub struct DiscardSink;

impl DiscardSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for DiscardSink {
    fn write(&self, buf: &[u8]) -> Result<usize> {
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
