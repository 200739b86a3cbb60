//! Core formatter types

pub mod error;
pub mod formatter;
pub mod level;
pub mod record;
pub mod value;

mod caller;
mod encode;
mod timestamp;

pub use error::ParseLevelError;
pub use formatter::{Formatter, FormatterBuilder};
pub use level::Level;
pub use record::Record;
pub use value::{Loggable, Marshal, RawString, Value};
