//! Convenience macros for building field maps.
//!
//! # Examples
//!
//! ```
//! use kvline::{fields, Level, Record};
//!
//! let record = Record::new(Level::Info, "user logged in").with_fields(fields! {
//!     "action" => "login",
//!     "attempt" => 2i64,
//!     "remember_me" => true,
//! });
//!
//! assert_eq!(record.fields.len(), 3);
//! ```

/// Build a `HashMap<String, Value>` from `key => value` pairs.
///
/// Values go through [`Value::from`](crate::Value), so anything with a
/// `From` conversion works directly.
///
/// # Examples
///
/// ```
/// use kvline::{fields, Value};
///
/// let map = fields! {
///     "status" => "ok",
///     "msg_count" => 1i64,
/// };
/// assert_eq!(map["status"], Value::Str("ok".to_string()));
/// assert_eq!(map["msg_count"], Value::Int(1));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::collections::HashMap::<::std::string::String, $crate::Value>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = ::std::collections::HashMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        map
    }};
}
