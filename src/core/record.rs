//! Log record structure

use super::level::Level;
use super::value::Value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One structured log event: timestamp, severity, message, and named fields.
///
/// Field keys are unique by construction of the map; their insertion order is
/// irrelevant because the formatter orders them deterministically. The
/// message may be empty, in which case no `_msg` field is emitted.
///
/// # Examples
///
/// ```
/// use kvline::{Level, Record};
///
/// let record = Record::new(Level::Info, "delivered message ok")
///     .with_field("action", "deliver_msg")
///     .with_field("msg_count", 1i64);
///
/// assert_eq!(record.fields.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, Value>,
}

impl Record {
    /// Create a record stamped with the current UTC time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            fields: HashMap::new(),
        }
    }

    /// Replace the timestamp, for replay or testing against fixed instants.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Add one field.
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Merge a prebuilt field map; existing keys are overwritten.
    #[must_use]
    pub fn with_fields(mut self, fields: HashMap<String, Value>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add one field in place.
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }
}
