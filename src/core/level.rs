//! Log severity levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display names for every level, lowest first.
const LEVEL_NAMES: [&str; 7] = [
    "debug", "verbose", "info", "warn", "error", "fatal", "panic",
];

/// Amount to add to a level's numeric value so the lowest level aligns with
/// index 0 of [`LEVEL_NAMES`].
const LEVEL_OFFSET: i8 = 2;

/// Severity rank of a log entry, used for filtering and escalation.
///
/// The total order follows the numeric values: an entry is suppressed when the
/// configured minimum level is greater than the entry's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Level {
    Debug = -2,
    Verbose = -1,
    #[default]
    Info = 0,
    Warn = 1,
    Error = 2,
    Fatal = 3,
    Panic = 4,
}

impl Level {
    /// The fixed lowercase display name for this level.
    pub fn name(self) -> &'static str {
        LEVEL_NAMES[(self as i8 + LEVEL_OFFSET) as usize]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "verbose" => Ok(Level::Verbose),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "panic" => Ok(Level::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LEVELS: [Level; 7] = [
        Level::Debug,
        Level::Verbose,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    #[test]
    fn test_name_table_alignment() {
        for (i, level) in ALL_LEVELS.iter().enumerate() {
            assert_eq!(level.name(), LEVEL_NAMES[i]);
        }
        assert_eq!((Level::Debug as i8 + LEVEL_OFFSET) as usize, 0);
        assert_eq!((Level::Panic as i8 + LEVEL_OFFSET) as usize, LEVEL_NAMES.len() - 1);
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Debug < Level::Verbose);
        assert!(Level::Verbose < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Panic);
    }

    #[test]
    fn test_display_matches_name() {
        for level in ALL_LEVELS {
            assert_eq!(format!("{}", level), level.name());
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for level in ALL_LEVELS {
            let parsed: Level = level.name().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warn);
        assert!("notice".parse::<Level>().is_err());
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }
}
