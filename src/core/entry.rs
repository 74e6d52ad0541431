//! Transient per-call entry buffer
//!
//! Holds the ordered, already-rendered segments of one log entry plus the
//! joining/wrapping mode, and turns them into a single sink write. An entry
//! buffer lives only for the duration of one write call.

use super::error::Result;
use crate::sinks::Sink;

pub(crate) struct EntryBuffer {
    wrap_json: bool,
    delimiter: u8,
    segments: Vec<String>,
}

impl EntryBuffer {
    /// Buffer for a tab-joined text entry.
    pub(crate) fn text() -> Self {
        Self {
            wrap_json: false,
            delimiter: b'\t',
            segments: Vec::new(),
        }
    }

    /// Buffer for a comma-joined, brace-wrapped JSON entry.
    pub(crate) fn json() -> Self {
        Self {
            wrap_json: true,
            delimiter: b',',
            segments: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, segment: String) {
        self.segments.push(segment);
    }

    /// Join the segments, wrap if JSON, terminate with a newline, and write
    /// the result as one buffer.
    pub(crate) fn write(&self, sink: &dyn Sink) -> Result<()> {
        let total: usize = self.segments.iter().map(String::len).sum();
        let mut buf = Vec::with_capacity(total + self.segments.len() + 3);

        if self.wrap_json {
            buf.push(b'{');
        }

        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                buf.push(self.delimiter);
            }
            buf.extend_from_slice(segment.as_bytes());
        }

        if self.wrap_json {
            buf.push(b'}');
        }
        buf.push(b'\n');

        sink.write(&buf)?;
        Ok(())
    }
}
