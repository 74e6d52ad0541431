//! Output format selection and optional-segment flags

use super::level::Level;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Flags controlling which optional segments are rendered into an entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatFlags: u32 {
        /// The lowercase level name.
        const LEVEL = 1 << 0;
        /// Epoch seconds with 6-digit microseconds.
        const TIMESTAMP = 1 << 1;
        /// Calendar date as `YYYY/MM/DD`.
        const DATE = 1 << 2;
        /// Clock time as `HH:MM:SS`.
        const TIME = 1 << 3;
        /// 6-digit microseconds appended to the clock time.
        const MICROSECONDS = 1 << 4;
        /// The caller string, verbatim.
        const CALLER = 1 << 5;
    }
}

/// Encoding mode for log entries.
///
/// `Text` joins rendered segments with tabs; `Json` emits one JSON object per
/// entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    #[default]
    Json,
}

/// Setup descriptor consumed once at configuration construction.
///
/// Typically deserialized from external process configuration to choose the
/// encoding mode, minimum level, and sink path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    pub format: LogFormat,
    pub level: Level,
    pub path: String,
}

impl SetupConfig {
    pub fn new(format: LogFormat, level: Level, path: impl Into<String>) -> Self {
        Self {
            format,
            level,
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine() {
        let flags = FormatFlags::LEVEL | FormatFlags::CALLER;
        assert!(flags.contains(FormatFlags::LEVEL));
        assert!(flags.contains(FormatFlags::CALLER));
        assert!(!flags.contains(FormatFlags::TIMESTAMP));
    }

    #[test]
    fn test_format_default_is_json() {
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn test_setup_config_serde_roundtrip() {
        let setup = SetupConfig::new(LogFormat::Text, Level::Warn, "/var/log/app.log");
        let json = serde_json::to_string(&setup).unwrap();
        assert!(json.contains("\"format\":\"text\""));
        assert!(json.contains("\"level\":\"warn\""));

        let parsed: SetupConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.format, LogFormat::Text);
        assert_eq!(parsed.level, Level::Warn);
        assert_eq!(parsed.path, "/var/log/app.log");
    }
}
