//! Logger configuration and the text/JSON entry encoders
//!
//! `LoggerConfig` is the mutable, thread-shared state for one logger instance:
//! minimum level, escalation threshold, encoding mode, segment flags, persistent
//! fields, and the output sink. The persistent field sequence lives behind a
//! copy-on-write snapshot: readers clone an `Arc` under the lock, mutations
//! build a fresh sequence and swap the pointer, so an in-flight encode or a
//! configuration clone never observes a half-mutated list.

use super::entry::EntryBuffer;
use super::error::Result;
use super::field::Field;
use super::format::{FormatFlags, LogFormat, SetupConfig};
use super::level::Level;
use crate::sinks::{self, Sink};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::sync::Arc;

/// Name of the field managed by [`LoggerConfig::add_subsystem`] and
/// [`LoggerConfig::remove_subsystem`]; it always occupies a single slot.
pub const SUBSYSTEM_FIELD: &str = "subsystem";

/// Configuration for the main system or a subsystem with custom settings.
pub struct LoggerConfig {
    min_level: Level,
    stack_level: Level,
    format: LogFormat,
    flags: FormatFlags,
    fields: Mutex<Arc<Vec<Field>>>,
    output: Option<Arc<dyn Sink>>,
}

fn base_flags(format: LogFormat) -> FormatFlags {
    let mut flags = FormatFlags::CALLER | FormatFlags::LEVEL;
    match format {
        LogFormat::Text => {
            flags |= FormatFlags::DATE | FormatFlags::TIME | FormatFlags::MICROSECONDS;
        }
        LogFormat::Json => {
            flags |= FormatFlags::TIMESTAMP;
        }
    }
    flags
}

fn field_exists(name: &str, fields: &[Field]) -> bool {
    fields.iter().any(|f| f.name() == name)
}

/// JSON-quote a string value. Infallible: rendering goes through
/// `serde_json::Value`, whose display form is always valid JSON.
fn json_quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

impl LoggerConfig {
    /// Create a configuration with default settings.
    ///
    /// Minimum level is `Info` (`Verbose` in development mode); the sink is
    /// opened from `path`, standard error when the path is empty.
    pub fn new(is_development: bool, format: LogFormat, path: &str) -> Result<Self> {
        let output = sinks::open_sink(path)?;

        Ok(Self {
            min_level: if is_development {
                Level::Verbose
            } else {
                Level::Info
            },
            stack_level: Level::Panic,
            format,
            flags: base_flags(format),
            fields: Mutex::new(Arc::new(Vec::new())),
            output: Some(output),
        })
    }

    /// Create a configuration from a setup descriptor.
    pub fn from_setup(setup: &SetupConfig) -> Result<Self> {
        let output = sinks::open_sink(&setup.path)?;

        Ok(Self {
            min_level: setup.level,
            stack_level: Level::Panic,
            format: setup.format,
            flags: base_flags(setup.format),
            fields: Mutex::new(Arc::new(Vec::new())),
            output: Some(output),
        })
    }

    /// Create a configuration that drops every entry and never fails.
    pub fn disabled() -> Self {
        Self {
            min_level: Level::Info,
            stack_level: Level::Panic,
            format: LogFormat::default(),
            flags: FormatFlags::empty(),
            fields: Mutex::new(Arc::new(Vec::new())),
            output: None,
        }
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn set_min_level(&mut self, level: Level) {
        self.min_level = level;
    }

    /// Level at or above which the escalation layer raises a panic unwind.
    pub fn stack_level(&self) -> Level {
        self.stack_level
    }

    pub fn set_stack_level(&mut self, level: Level) {
        self.stack_level = level;
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub fn set_format(&mut self, format: LogFormat) {
        self.format = format;
    }

    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: FormatFlags) {
        self.flags = flags;
    }

    /// Replace the output sink; `None` drops all entries.
    pub fn set_sink(&mut self, sink: Option<Arc<dyn Sink>>) {
        self.output = sink;
    }

    /// Snapshot of the persistent fields at this instant.
    ///
    /// The snapshot is immutable; later mutations swap in a new sequence and
    /// never touch one already handed out.
    pub fn fields(&self) -> Arc<Vec<Field>> {
        Arc::clone(&self.fields.lock())
    }

    /// Add a persistent field.
    ///
    /// A field with the same name is replaced in place, keeping its original
    /// position in the output order; otherwise the field is appended. O(n)
    /// scan; field counts are bounded by application code.
    pub fn add_field(&self, new_field: Field) {
        let mut guard = self.fields.lock();
        let mut fields: Vec<Field> = (**guard).clone();

        match fields.iter().position(|f| f.name() == new_field.name()) {
            Some(i) => fields[i] = new_field,
            None => fields.push(new_field),
        }

        *guard = Arc::new(fields);
    }

    /// Set the `subsystem` field, creating it if absent.
    pub fn add_subsystem(&self, name: impl Into<String>) {
        let new_field = Field::string(SUBSYSTEM_FIELD, name);

        let mut guard = self.fields.lock();
        let mut fields: Vec<Field> = (**guard).clone();

        match fields.iter().position(|f| f.name() == SUBSYSTEM_FIELD) {
            Some(i) => fields[i] = new_field,
            None => fields.push(new_field),
        }

        *guard = Arc::new(fields);
    }

    /// Remove the `subsystem` field, preserving the order of the remainder.
    /// No-op if absent.
    pub fn remove_subsystem(&self) {
        let mut guard = self.fields.lock();

        if let Some(i) = guard.iter().position(|f| f.name() == SUBSYSTEM_FIELD) {
            let mut fields: Vec<Field> = (**guard).clone();
            fields.remove(i);
            *guard = Arc::new(fields);
        }
    }

    /// Encode one entry and write it to the sink.
    ///
    /// Entries below the minimum level, or with no sink configured, are
    /// silently dropped. Sink write failures propagate to the caller.
    pub fn write_entry(
        &self,
        level: Level,
        caller: &str,
        fields: &[Field],
        message: &str,
    ) -> Result<()> {
        match self.format {
            LogFormat::Text => self.write_text_entry(level, caller, fields, message),
            LogFormat::Json => self.write_json_entry(level, caller, fields, message),
        }
    }

    /// Combined date/time segment, `None` when neither flag is set.
    ///
    /// Date and time share one segment: `YYYY/MM/DD`, a space, `HH:MM:SS`,
    /// then `micro_separator` and 6-digit microseconds.
    fn datetime_segment(&self, now: &DateTime<Local>, micro_separator: char) -> Option<String> {
        let mut datetime = String::new();

        if self.flags.contains(FormatFlags::DATE) {
            datetime.push_str(&now.format("%Y/%m/%d").to_string());
            if self.flags.contains(FormatFlags::TIME) {
                datetime.push(' ');
            }
        }

        if self.flags.contains(FormatFlags::TIME) {
            datetime.push_str(&now.format("%H:%M:%S").to_string());
            if self.flags.contains(FormatFlags::MICROSECONDS) {
                datetime.push(micro_separator);
                datetime.push_str(&format!("{:06}", now.timestamp_subsec_micros()));
            }
        }

        if datetime.is_empty() {
            None
        } else {
            Some(datetime)
        }
    }

    fn write_text_entry(
        &self,
        level: Level,
        caller: &str,
        fields: &[Field],
        message: &str,
    ) -> Result<()> {
        let Some(output) = self.output.as_deref() else {
            return Ok(());
        };

        if self.min_level > level {
            return Ok(()); // Level is below minimum
        }

        let mut entry = EntryBuffer::text();

        if self.flags.contains(FormatFlags::LEVEL) {
            entry.push(level.name().to_string());
        }

        let now = Local::now();

        if self.flags.contains(FormatFlags::TIMESTAMP) {
            entry.push(format!(
                "ts {}.{:06}",
                now.timestamp(),
                now.timestamp_subsec_micros()
            ));
        }

        if let Some(datetime) = self.datetime_segment(&now, '.') {
            entry.push(datetime);
        }

        if self.flags.contains(FormatFlags::CALLER) {
            entry.push(caller.to_string());
        }

        entry.push(message.to_string());

        let persistent = self.fields();
        for (i, field) in persistent.iter().enumerate() {
            if field_exists(field.name(), &persistent[..i]) {
                continue; // skip duplicate field name
            }
            entry.push(format!("{}: {}", field.name(), field.value_json()));
        }

        for (i, field) in fields.iter().enumerate() {
            if field_exists(field.name(), &persistent) || field_exists(field.name(), &fields[..i])
            {
                continue; // skip duplicate field name
            }
            entry.push(format!("{}: {}", field.name(), field.value_json()));
        }

        entry.write(output)
    }

    fn write_json_entry(
        &self,
        level: Level,
        caller: &str,
        fields: &[Field],
        message: &str,
    ) -> Result<()> {
        let Some(output) = self.output.as_deref() else {
            return Ok(());
        };

        if self.min_level > level {
            return Ok(()); // Level is below minimum
        }

        let mut entry = EntryBuffer::json();

        if self.flags.contains(FormatFlags::LEVEL) {
            entry.push(format!("\"level\":\"{}\"", level.name()));
        }

        let now = Local::now();

        if self.flags.contains(FormatFlags::TIMESTAMP) {
            entry.push(format!(
                "\"ts\":{}.{:06}",
                now.timestamp(),
                now.timestamp_subsec_micros()
            ));
        }

        if let Some(datetime) = self.datetime_segment(&now, ' ') {
            let mut name = String::new();
            if self.flags.contains(FormatFlags::DATE) {
                name.push_str("date");
            }
            if self.flags.contains(FormatFlags::TIME) {
                name.push_str("time");
            }
            entry.push(format!("\"{}\":\"{}\"", name, datetime));
        }

        if self.flags.contains(FormatFlags::CALLER) {
            entry.push(format!("\"caller\":{}", json_quote(caller)));
        }

        entry.push(format!("\"msg\":{}", json_quote(message)));

        let persistent = self.fields();
        for (i, field) in persistent.iter().enumerate() {
            if field_exists(field.name(), &persistent[..i]) {
                continue; // skip duplicate field name
            }
            entry.push(format!("\"{}\":{}", field.name(), field.value_json()));
        }

        for (i, field) in fields.iter().enumerate() {
            if field_exists(field.name(), &persistent) || field_exists(field.name(), &fields[..i])
            {
                continue; // skip duplicate field name
            }
            entry.push(format!("\"{}\":{}", field.name(), field.value_json()));
        }

        entry.write(output)
    }
}

impl Clone for LoggerConfig {
    /// Independent copy: its own field snapshot handle, shared sink.
    ///
    /// Field mutations on either side build a new sequence, so neither copy
    /// can observe the other's changes.
    fn clone(&self) -> Self {
        Self {
            min_level: self.min_level,
            stack_level: self.stack_level,
            format: self.format,
            flags: self.flags,
            fields: Mutex::new(self.fields()),
            output: self.output.clone(),
        }
    }
}
