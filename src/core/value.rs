//! Field value classification for structured key-value output
//!
//! This module provides:
//! - `Value`: the closed set of renderable field value shapes
//! - `Marshal`: trait for types that supply their own verbatim rendering
//! - `Loggable`: trait for types that expand into multiple sub-fields
//! - `RawString`: convenience wrapper emitted without quoting

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A field value, classified by how it renders on the wire.
///
/// Classification happens at construction time, so rendering a record twice
/// always produces identical bytes. Each variant maps to one rendering rule:
/// quoted text, verbatim text, flattened sub-fields, or a bare token. When a
/// type could satisfy more than one rule, the constructor chosen decides;
/// see [`Value::marshal`] and [`Value::nested`] for the capability-based ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Text, rendered as a double-quoted escaped literal.
    Str(String),
    /// Nullable text; `None` renders as the bare literal `<nil>`.
    OptStr(Option<String>),
    /// An error description, quoted like [`Value::Str`].
    Error(String),
    /// Raw bytes, quoted with each non-printable byte escaped as `\xHH`.
    Bytes(Vec<u8>),
    /// Pre-rendered text written verbatim after `key=`, no quoting and no
    /// escaping. The producer is trusted to emit well-formed output.
    Raw(String),
    /// Signed integer, rendered bare.
    Int(i64),
    /// Unsigned integer, rendered bare.
    Uint(u64),
    /// Floating point number, rendered bare.
    Float(f64),
    /// Boolean, rendered bare as `true`/`false`.
    Bool(bool),
    /// Compound value flattened into one field per sub-key, each sub-key
    /// concatenated directly onto the parent key. Sub-keys iterate in sorted
    /// order, so flattened output is deterministic.
    Nested(BTreeMap<String, Value>),
}

impl Value {
    /// Classify any displayable type as quoted text.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvline::Value;
    /// use std::net::Ipv4Addr;
    ///
    /// let v = Value::display(&Ipv4Addr::LOCALHOST);
    /// assert_eq!(v, Value::Str("127.0.0.1".to_string()));
    /// ```
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Value::Str(value.to_string())
    }

    /// Classify an error by its description, rendered as quoted text.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvline::Value;
    ///
    /// let err = "nan".parse::<i32>().unwrap_err();
    /// let v = Value::error(&err);
    /// assert_eq!(v, Value::Error("invalid digit found in string".to_string()));
    /// ```
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Value::Error(err.to_string())
    }

    /// Capture a [`Marshal`] implementor's verbatim rendering.
    ///
    /// The text is emitted exactly as returned, with no quotes added. A type
    /// that also implements `Display` still renders verbatim through this
    /// constructor; use [`Value::display`] for the quoted form instead.
    pub fn marshal<M: Marshal + ?Sized>(value: &M) -> Self {
        Value::Raw(value.marshal())
    }

    /// Capture a [`Loggable`] implementor's sub-fields for flattening.
    pub fn nested<L: Loggable + ?Sized>(value: &L) -> Self {
        Value::Nested(value.log_values())
    }

    /// Wrap already-formatted text for verbatim emission.
    pub fn raw(text: impl Into<String>) -> Self {
        Value::Raw(text.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        Value::OptStr(s)
    }
}

impl From<Option<&str>> for Value {
    fn from(s: Option<&str>) -> Self {
        Value::OptStr(s.map(String::from))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Nested(map)
    }
}

/// Types that render themselves to pre-formatted text.
///
/// The returned text is written after `key=` exactly as supplied, including
/// any quotes the implementor chooses to emit. This bypasses all escaping,
/// so implementors must keep the output free of spaces and newlines unless
/// they quote it themselves.
///
/// # Examples
///
/// ```
/// use kvline::{Marshal, Value};
///
/// struct AgeRange {
///     min: u32,
///     max: u32,
/// }
///
/// impl Marshal for AgeRange {
///     fn marshal(&self) -> String {
///         format!("\"{}-{}\"", self.min, self.max)
///     }
/// }
///
/// let v = Value::marshal(&AgeRange { min: 18, max: 93 });
/// assert_eq!(v, Value::Raw("\"18-93\"".to_string()));
/// ```
pub trait Marshal {
    /// Produce the verbatim wire text for this value.
    fn marshal(&self) -> String;
}

/// Types that expand into multiple sub-fields under a common key prefix.
///
/// Each returned sub-key is concatenated directly onto the parent field key,
/// so sub-keys normally start with a separator such as `"."`.
///
/// # Examples
///
/// ```
/// use kvline::{Loggable, Value};
/// use std::collections::BTreeMap;
///
/// struct Timing {
///     min_ms: i64,
///     max_ms: i64,
/// }
///
/// impl Loggable for Timing {
///     fn log_values(&self) -> BTreeMap<String, Value> {
///         BTreeMap::from([
///             (".min_ms".to_string(), Value::Int(self.min_ms)),
///             (".max_ms".to_string(), Value::Int(self.max_ms)),
///         ])
///     }
/// }
///
/// // Under the key "exec_times" this renders as
/// // exec_times.max_ms=93 exec_times.min_ms=5
/// let v = Value::nested(&Timing { min_ms: 5, max_ms: 93 });
/// assert!(matches!(v, Value::Nested(ref m) if m.len() == 2));
/// ```
pub trait Loggable {
    /// Sub-key to sub-value mapping this value expands into.
    fn log_values(&self) -> BTreeMap<String, Value>;
}

/// A string emitted verbatim, without quoting or escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawString(pub String);

impl RawString {
    pub fn new(text: impl Into<String>) -> Self {
        RawString(text.into())
    }
}

impl Marshal for RawString {
    fn marshal(&self) -> String {
        self.0.clone()
    }
}

impl From<RawString> for Value {
    fn from(raw: RawString) -> Self {
        Value::Raw(raw.0)
    }
}
