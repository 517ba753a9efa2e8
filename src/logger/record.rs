//! Log record encoding.
//!
//! # Responsibilities
//! - Encode one record as a console-style line
//! - Render structured fields as a compact JSON object
//! - Shorten call-site paths for readability
//!
//! # Design Decisions
//! - Tab-separated columns: timestamp, level, call-site, message, fields
//! - Timestamps are local time, `%Y-%m-%d %H:%M:%S`
//! - A field value that fails to serialize becomes `null`; a log call can
//!   never fail because of its context

use std::fmt::Write as _;

use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Level;

/// Timestamp format used in encoded records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A structured key-value pair attached to a log record.
#[derive(Debug, Clone)]
pub struct Field {
    key: &'static str,
    value: Value,
}

impl Field {
    /// Capture a serializable value under `key`.
    pub fn new(key: &'static str, value: impl Serialize) -> Self {
        Self {
            key,
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }
}

/// Encode one record as a single line, without trailing newline.
pub(crate) fn encode(level: Level, caller: &str, message: &str, fields: &[Field]) -> String {
    let mut line = String::with_capacity(64 + message.len());
    let _ = write!(
        line,
        "{}\t{}\t{}\t{}",
        Local::now().format(TIMESTAMP_FORMAT),
        level,
        caller,
        message
    );

    if !fields.is_empty() {
        let map: Map<String, Value> = fields
            .iter()
            .map(|f| (f.key.to_string(), f.value.clone()))
            .collect();
        let _ = write!(line, "\t{}", Value::Object(map));
    }

    line
}

/// Shorten a call-site to its last two path components plus line number.
pub(crate) fn short_caller(file: &str, line: u32) -> String {
    let mut parts = file.rsplitn(3, ['/', '\\']);
    let name = parts.next().unwrap_or(file);
    match parts.next() {
        Some(dir) => format!("{dir}/{name}:{line}"),
        None => format!("{name}:{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_encode_without_fields() {
        let line = encode(Level::Info, "app/main.rs:10", "Hello World", &[]);
        let cols: Vec<&str> = line.split('\t').collect();
        assert_eq!(cols.len(), 4);
        assert!(NaiveDateTime::parse_from_str(cols[0], TIMESTAMP_FORMAT).is_ok());
        assert_eq!(cols[1], "info");
        assert_eq!(cols[2], "app/main.rs:10");
        assert_eq!(cols[3], "Hello World");
    }

    #[test]
    fn test_encode_renders_fields_as_json() {
        let fields = [Field::new("user", "alice"), Field::new("attempt", 2)];
        let line = encode(Level::Warn, "x.rs:1", "retrying", &fields);
        let json = line.rsplit('\t').next().unwrap();
        let value: Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["user"], "alice");
        assert_eq!(value["attempt"], 2);
    }

    #[test]
    fn test_short_caller_keeps_two_components() {
        assert_eq!(short_caller("src/rotation/monitor.rs", 42), "rotation/monitor.rs:42");
        assert_eq!(short_caller("main.rs", 7), "main.rs:7");
    }
}
