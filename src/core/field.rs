//! Named, typed key/value fields attached to log entries
//!
//! A field renders its value as standalone-valid JSON text regardless of the
//! output mode: the JSON encoder splices the rendering directly into the entry
//! object, and the text encoder uses the same rendering as the value's textual
//! form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Uint(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Uint(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::Uint(u)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// A named, typed value attached to a log entry.
///
/// Two fields are duplicates iff their names are equal; the value plays no part
/// in duplicate resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    value: FieldValue,
}

impl Field {
    /// Create a string-valued field.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::String(value.into()),
        }
    }

    /// Create a signed-integer field.
    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Int(value),
        }
    }

    /// Create an unsigned-integer field.
    pub fn uint(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Uint(value),
        }
    }

    /// Create a float field.
    ///
    /// Non-finite values render as JSON `null`.
    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Float(value),
        }
    }

    /// Create a boolean field.
    pub fn bool(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Bool(value),
        }
    }

    /// Create a field carrying an error's display text.
    pub fn error(name: impl Into<String>, err: &dyn std::error::Error) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::String(err.to_string()),
        }
    }

    /// Create a null-valued field.
    pub fn null(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Null,
        }
    }

    /// Create a field from any convertible value.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The field's stable identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Render the value as JSON text.
    ///
    /// The result is syntactically valid JSON on its own: strings are quoted
    /// and escaped, numbers are unquoted, booleans are the literals
    /// `true`/`false`.
    #[must_use]
    pub fn value_json(&self) -> String {
        self.value.to_json_value().to_string()
    }
}
