//! # Fieldlog
//!
//! A structured logging engine: entries are assembled from a message, a
//! severity level, caller information, and key/value fields, then encoded as
//! tab-separated text or one JSON object per line and written to a configured
//! sink.
//!
//! ## Features
//!
//! - **Level Filtering**: Ordered severity levels with a minimum-level gate
//! - **Persistent Fields**: Configuration-scoped key/value fields with
//!   deterministic deduplication and ordering
//! - **Two Encoders**: Human-readable text and machine-readable JSON
//! - **Thread Safe**: Shared field state behind copy-on-write snapshots

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Field, FieldValue, FormatFlags, Level, LogFormat, Logger, LoggerConfig, LoggerError,
        Result, SetupConfig, SUBSYSTEM_FIELD,
    };
    pub use crate::sinks::{DiscardSink, FileSink, Sink, StderrSink, DISCARD_SENTINEL};
}

pub use crate::core::{
    Field, FieldValue, FormatFlags, Level, LogFormat, Logger, LoggerConfig, LoggerError, Result,
    SetupConfig, SUBSYSTEM_FIELD,
};
pub use crate::sinks::{DiscardSink, FileSink, Sink, StderrSink, DISCARD_SENTINEL};
