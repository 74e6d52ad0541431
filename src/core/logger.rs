//! Caller-facing logger API
//!
//! `Logger` wraps a [`LoggerConfig`] with per-level helpers, automatic caller
//! capture, and the escalation policy for fatal/panic levels. The encoders
//! themselves never terminate the process; escalation happens here, after the
//! write attempt, whether or not the write succeeded.

use super::config::LoggerConfig;
use super::error::Result;
use super::field::Field;
use super::format::{LogFormat, SetupConfig};
use super::level::Level;
use std::panic::Location;

#[derive(Clone)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    /// Create a logger with default settings; see [`LoggerConfig::new`].
    pub fn new(is_development: bool, format: LogFormat, path: &str) -> Result<Self> {
        Ok(Self {
            config: LoggerConfig::new(is_development, format, path)?,
        })
    }

    /// Create a logger from a setup descriptor.
    pub fn from_setup(setup: &SetupConfig) -> Result<Self> {
        Ok(Self {
            config: LoggerConfig::from_setup(setup)?,
        })
    }

    /// Create a logger that drops every entry.
    pub fn disabled() -> Self {
        Self {
            config: LoggerConfig::disabled(),
        }
    }

    /// Wrap an existing configuration.
    pub fn from_config(config: LoggerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LoggerConfig {
        &mut self.config
    }

    /// Add a persistent field to every future entry.
    pub fn add_field(&self, field: Field) {
        self.config.add_field(field);
    }

    /// Set the `subsystem` field.
    pub fn add_subsystem(&self, name: impl Into<String>) {
        self.config.add_subsystem(name);
    }

    /// Remove the `subsystem` field.
    pub fn remove_subsystem(&self) {
        self.config.remove_subsystem();
    }

    /// Log a message at `level`.
    ///
    /// The caller segment is the invoking source location as `file:line`.
    /// Returns the sink write result; a `Fatal` entry exits the process and an
    /// entry at or above the configured stack level panics with the message,
    /// in both cases after the write attempt.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>) -> Result<()> {
        self.log_with(level, &[], message)
    }

    /// Log a message at `level` with call-specific fields.
    ///
    /// Call-specific fields never override persistent ones; duplicates resolve
    /// to the first-seen name.
    #[track_caller]
    pub fn log_with(&self, level: Level, fields: &[Field], message: impl Into<String>) -> Result<()> {
        let location = Location::caller();
        let caller = format!("{}:{}", location.file(), location.line());
        let message = message.into();

        let result = self.config.write_entry(level, &caller, fields, &message);
        self.escalate(level, &message);
        result
    }

    /// Apply the termination policy for the entry's level.
    ///
    /// Runs after the write attempt, even when the write failed.
    fn escalate(&self, level: Level, message: &str) {
        if level == Level::Fatal {
            std::process::exit(1);
        }

        if level >= self.config.stack_level() {
            panic!("{}", message);
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Debug, message)
    }

    #[inline]
    #[track_caller]
    pub fn verbose(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Verbose, message)
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Info, message)
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Warn, message)
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Error, message)
    }

    /// Log at `Fatal` and exit the process with status 1 after the write.
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Fatal, message)
    }

    /// Helper for structured info logging
    #[inline]
    #[track_caller]
    pub fn info_with(&self, fields: &[Field], message: impl Into<String>) -> Result<()> {
        self.log_with(Level::Info, fields, message)
    }

    /// Helper for structured error logging
    #[inline]
    #[track_caller]
    pub fn error_with(&self, fields: &[Field], message: impl Into<String>) -> Result<()> {
        self.log_with(Level::Error, fields, message)
    }
}
