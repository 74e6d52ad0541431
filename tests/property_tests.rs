//! Property-based tests for fieldlog using proptest

use fieldlog::core::{Field, FormatFlags, Level, LogFormat, LoggerConfig, Result};
use fieldlog::sinks::Sink;
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

// ============================================================================
// Level Tests
// ============================================================================

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Verbose),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
        Just(Level::Panic),
    ]
}

proptest! {
    /// Level display names parse back to the same level
    #[test]
    fn test_level_name_roundtrip(level in any_level()) {
        let parsed: Level = level.name().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with the numeric values
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as i8;
        let val2 = level2 as i8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }
}

// ============================================================================
// Field Rendering Tests
// ============================================================================

proptest! {
    /// String field values always render as standalone-valid JSON strings
    #[test]
    fn test_string_value_json_is_valid(value in ".*") {
        let field = Field::string("k", value.clone());
        let parsed: serde_json::Value = serde_json::from_str(&field.value_json())
            .expect("value_json must be valid JSON");
        prop_assert_eq!(parsed, serde_json::Value::String(value));
    }

    /// Numeric field values render as JSON numbers
    #[test]
    fn test_int_value_json_is_valid(value in any::<i64>()) {
        let field = Field::int("k", value);
        let parsed: serde_json::Value = serde_json::from_str(&field.value_json()).unwrap();
        prop_assert_eq!(parsed.as_i64(), Some(value));
    }

    /// Float field values render as JSON numbers, or null when non-finite
    #[test]
    fn test_float_value_json_is_valid(value in any::<f64>()) {
        let field = Field::float("k", value);
        let parsed: serde_json::Value = serde_json::from_str(&field.value_json())
            .expect("value_json must be valid JSON");
        if value.is_finite() {
            prop_assert!(parsed.is_number());
        } else {
            prop_assert!(parsed.is_null());
        }
    }
}

// ============================================================================
// Persistent Field Management Tests
// ============================================================================

proptest! {
    /// Re-adding a name never grows the list; first-occurrence order is kept
    #[test]
    fn test_add_field_idempotent(names in proptest::collection::vec("[a-e]", 0..20)) {
        let config = LoggerConfig::disabled();
        for (i, name) in names.iter().enumerate() {
            config.add_field(Field::int(name.clone(), i as i64));
        }

        let mut expected_order: Vec<String> = Vec::new();
        for name in &names {
            if !expected_order.contains(name) {
                expected_order.push(name.clone());
            }
        }

        let stored: Vec<String> = config
            .fields()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        prop_assert_eq!(stored, expected_order);
    }
}

// ============================================================================
// JSON Encoder Tests
// ============================================================================

#[derive(Debug)]
struct CaptureSink(Mutex<Vec<u8>>);

impl Sink for CaptureSink {
    fn write(&self, buf: &[u8]) -> Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

fn capture_config(flags: FormatFlags) -> (LoggerConfig, Arc<CaptureSink>) {
    let sink = Arc::new(CaptureSink(Mutex::new(Vec::new())));
    let mut config = LoggerConfig::disabled();
    config.set_format(LogFormat::Json);
    config.set_flags(flags);
    let dyn_sink: Arc<dyn Sink> = sink.clone();
    config.set_sink(Some(dyn_sink));
    (config, sink)
}

proptest! {
    /// Every accepted entry is one parseable JSON object carrying the message
    #[test]
    fn test_json_entry_always_parses(
        message in ".*",
        caller in "[a-z_]{1,8}\\.rs:[0-9]{1,4}",
        values in proptest::collection::vec(any::<i64>(), 0..5),
    ) {
        let (config, sink) = capture_config(FormatFlags::LEVEL | FormatFlags::CALLER);

        let fields: Vec<Field> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Field::int(format!("f{}", i), *v))
            .collect();

        config.write_entry(Level::Info, &caller, &fields, &message).unwrap();

        let bytes = sink.0.lock().unwrap().clone();
        let line = String::from_utf8(bytes).unwrap();
        prop_assert!(line.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(line.trim_end_matches('\n'))
            .expect("encoded entry must be valid JSON");
        prop_assert_eq!(parsed["msg"].as_str(), Some(message.as_str()));
        prop_assert_eq!(parsed["caller"].as_str(), Some(caller.as_str()));
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(parsed[format!("f{}", i)].as_i64(), Some(*v));
        }
    }

    /// Call-specific fields never override persistent ones
    #[test]
    fn test_persistent_always_wins(value in any::<i64>(), shadow in any::<i64>()) {
        let (config, sink) = capture_config(FormatFlags::empty());
        config.add_field(Field::int("slot", value));

        config
            .write_entry(Level::Info, "", &[Field::int("slot", shadow)], "m")
            .unwrap();

        let bytes = sink.0.lock().unwrap().clone();
        let line = String::from_utf8(bytes).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(line.trim_end_matches('\n')).unwrap();
        prop_assert_eq!(parsed["slot"].as_i64(), Some(value));
    }
}
