//! Line assembly
//!
//! Turns one [`Record`] into one newline-terminated `key="value"` line:
//!
//! ```text
//! <timestamp> ll="<severity>" [srcfnc="<name>" srcline=<n>] <const-fields> <primary-fields> <sorted-fields> [_msg="<message>"]
//! ```
//!
//! Field order is fixed: constant fields in definition order, then primary
//! fields present in the record in configured order, then the remaining
//! fields sorted ascending by key, then the message. Identical inputs always
//! produce identical bytes.

use super::caller;
use super::encode;
use super::record::Record;
use super::timestamp;
use super::value::Value;
use std::collections::HashSet;

/// Immutable formatting configuration.
///
/// Built once via [`Formatter::builder`], then shared freely; `format` takes
/// `&self` and keeps no mutable state, so one instance can serve any number
/// of threads.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use kvline::{Formatter, Level, Record};
///
/// let formatter = Formatter::builder()
///     .constant_field("commit", "abcd1234")
///     .primary_fields(["action"])
///     .build();
///
/// let record = Record::new(Level::Info, "delivered message ok")
///     .with_timestamp(chrono::Utc.with_ymd_and_hms(2017, 7, 9, 17, 0, 5).unwrap())
///     .with_field("action", "deliver_msg")
///     .with_field("msg_count", 1i64);
///
/// assert_eq!(
///     String::from_utf8(formatter.format(&record)).unwrap(),
///     "2017-07-09T17:00:05.000Z ll=\"info\" commit=\"abcd1234\" \
///      action=\"deliver_msg\" msg_count=1 _msg=\"delivered message ok\"\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    primary_fields: Vec<String>,
    constant_fields: Vec<Vec<u8>>,
    include_caller: bool,
}

impl Formatter {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::new()
    }

    /// Render one record as a newline-terminated line. Infallible; the
    /// output buffer is freshly allocated per call.
    pub fn format(&self, record: &Record) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);

        timestamp::write_timestamp(&mut buf, &record.timestamp);
        buf.extend_from_slice(b" ll=\"");
        buf.extend_from_slice(record.level.as_str().as_bytes());
        buf.push(b'"');

        if self.include_caller {
            write_caller(&mut buf);
        }

        for fragment in &self.constant_fields {
            buf.extend_from_slice(fragment);
        }

        let mut emitted: HashSet<&str> = HashSet::with_capacity(self.primary_fields.len());
        for name in &self.primary_fields {
            if let Some(value) = record.fields.get(name) {
                encode::emit(&mut buf, name, value, 0);
                emitted.insert(name.as_str());
            }
        }

        let mut rest: Vec<(&String, &Value)> = record
            .fields
            .iter()
            .filter(|(key, _)| !emitted.contains(key.as_str()))
            .collect();
        rest.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in rest {
            encode::emit(&mut buf, key, value, 0);
        }

        if !record.message.is_empty() {
            buf.extend_from_slice(b" _msg=");
            encode::write_quoted_str(&mut buf, &record.message);
        }

        buf.push(b'\n');
        buf
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::builder().build()
    }
}

fn write_caller(buf: &mut Vec<u8>) {
    match caller::resolve() {
        Some(caller) if !caller.function.is_empty() => {
            buf.extend_from_slice(b" srcfnc=");
            encode::write_quoted_str(buf, &caller.function);
            buf.extend_from_slice(b" srcline=");
            buf.extend_from_slice(caller.line.to_string().as_bytes());
        }
        _ => buf.extend_from_slice(b" srcfnc=\"unknown\""),
    }
}

/// Builder for [`Formatter`].
///
/// Constant fields are encoded at build time with the exact encoder used for
/// record fields, so the frozen fragments can never drift from record-time
/// rendering.
#[derive(Debug, Clone, Default)]
pub struct FormatterBuilder {
    primary_fields: Vec<String>,
    constant_fields: Vec<Vec<u8>>,
    include_caller: bool,
}

impl FormatterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field names to emit first, in the given order. Names absent
    /// from a record are skipped for that record.
    #[must_use]
    pub fn primary_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_fields = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append one field emitted on every line, encoded immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvline::Formatter;
    ///
    /// let formatter = Formatter::builder()
    ///     .constant_field("service", "api-gateway")
    ///     .constant_field("pid", 4242i64)
    ///     .build();
    /// # let _ = formatter;
    /// ```
    #[must_use]
    pub fn constant_field<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        let mut fragment = Vec::new();
        encode::emit(&mut fragment, key, &value.into(), 0);
        self.constant_fields.push(fragment);
        self
    }

    /// Resolve and emit the call site (`srcfnc`/`srcline`) on every line.
    #[must_use]
    pub fn include_caller(mut self, enabled: bool) -> Self {
        self.include_caller = enabled;
        self
    }

    /// Freeze into an immutable [`Formatter`].
    #[must_use]
    pub fn build(self) -> Formatter {
        Formatter {
            primary_fields: self.primary_fields,
            constant_fields: self.constant_fields,
            include_caller: self.include_caller,
        }
    }
}
