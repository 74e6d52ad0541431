//! Output sink implementations
//!
//! A sink is the byte-stream destination a formatted entry is written to. The
//! engine only requires "write one buffer, report bytes written or failure" —
//! buffering, flushing, and rotation are out of scope.

pub mod discard;
pub mod file;
pub mod stderr;

pub use discard::DiscardSink;
pub use file::FileSink;
pub use stderr::StderrSink;

use crate::core::error::Result;
use std::sync::Arc;

/// Sentinel path resolving to [`DiscardSink`], for throughput benchmarking.
pub const DISCARD_SENTINEL: &str = "dummy";

/// Destination for encoded log entries.
///
/// Implementations take `&self` so a sink can be shared across configuration
/// clones and threads; a sink that is not internally synchronized may interleave
/// concurrent writers' bytes.
pub trait Sink: Send + Sync + std::fmt::Debug {
    /// Write one encoded entry, returning the number of bytes written.
    fn write(&self, buf: &[u8]) -> Result<usize>;

    fn name(&self) -> &str;
}

/// Resolve a sink from a path string.
///
/// Empty path selects standard error; the [`DISCARD_SENTINEL`] selects the
/// discard sink; anything else opens the file for append-only writing, creating
/// it if absent. Open failures are reported as [`LoggerError::SinkOpen`].
///
/// [`LoggerError::SinkOpen`]: crate::core::error::LoggerError::SinkOpen
pub fn open_sink(path: &str) -> Result<Arc<dyn Sink>> {
    if path.is_empty() {
        return Ok(Arc::new(StderrSink::new()));
    }

    if path == DISCARD_SENTINEL {
        return Ok(Arc::new(DiscardSink::new()));
    }

    Ok(Arc::new(FileSink::open(path)?))
}
