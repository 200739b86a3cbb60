//! # kvline
//!
//! A deterministic `key="value"` log line formatter for tools that tokenize
//! on whitespace and `=`.
//!
//! ## Features
//!
//! - **Stable Output**: fixed field order and byte-identical lines for
//!   identical records
//! - **Safe Quoting**: values escape to printable ASCII, so no input can
//!   break the line grammar
//! - **Nested Fields**: compound values flatten into `key.sub=value` pairs
//! - **Caller Resolution**: optional `srcfnc`/`srcline` fields naming the
//!   function that produced the record
//!
//! ## Example
//!
//! ```
//! use chrono::TimeZone;
//! use kvline::{fields, Formatter, Level, Record};
//!
//! let formatter = Formatter::builder()
//!     .primary_fields(["action", "status"])
//!     .build();
//!
//! let record = Record::new(Level::Info, "delivered message ok")
//!     .with_timestamp(chrono::Utc.with_ymd_and_hms(2017, 7, 9, 17, 0, 5).unwrap())
//!     .with_fields(fields! {
//!         "action" => "deliver_msg",
//!         "status" => "ok",
//!         "msg_count" => 1i64,
//!     });
//!
//! assert_eq!(
//!     String::from_utf8(formatter.format(&record)).unwrap(),
//!     "2017-07-09T17:00:05.000Z ll=\"info\" action=\"deliver_msg\" \
//!      status=\"ok\" msg_count=1 _msg=\"delivered message ok\"\n"
//! );
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Formatter, FormatterBuilder, Level, Loggable, Marshal, ParseLevelError, RawString, Record,
        Value,
    };
}

pub use crate::core::{
    Formatter, FormatterBuilder, Level, Loggable, Marshal, ParseLevelError, RawString, Record,
    Value,
};
