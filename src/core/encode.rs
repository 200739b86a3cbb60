//! Key-value pair encoding
//!
//! Renders one field as ` key=value` or ` key="value"`, dispatching on the
//! value's classification. Compound values flatten recursively into one
//! emitted field per sub-key. Every emitted field carries its own leading
//! space; the line always opens with the timestamp token, so no field is
//! ever first on the line.

use super::value::Value;

/// Nesting bound for compound flattening. A compound value reaching this
/// depth renders as the bare `<truncated>` marker instead of recursing.
pub(crate) const MAX_NESTING_DEPTH: usize = 16;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Append one field to `buf`. Infallible.
///
/// Dispatch order is significant and fixed: compound, verbatim, quoted text,
/// error text, byte text, then bare scalars.
pub(crate) fn emit(buf: &mut Vec<u8>, key: &str, value: &Value, depth: usize) {
    if let Value::Nested(entries) = value {
        if depth < MAX_NESTING_DEPTH {
            for (sub_key, sub_value) in entries {
                let child_key = format!("{key}{sub_key}");
                emit(buf, &child_key, sub_value, depth + 1);
            }
            return;
        }
        // depth cap reached; falls through to the truncation marker
    }

    buf.push(b' ');
    buf.extend_from_slice(key.as_bytes());
    buf.push(b'=');

    match value {
        Value::Nested(_) => buf.extend_from_slice(b"<truncated>"),
        Value::Raw(text) => buf.extend_from_slice(text.as_bytes()),
        Value::Str(s) => write_quoted_str(buf, s),
        Value::OptStr(Some(s)) => write_quoted_str(buf, s),
        Value::OptStr(None) => buf.extend_from_slice(b"<nil>"),
        Value::Error(desc) => write_quoted_str(buf, desc),
        Value::Bytes(bytes) => write_quoted_bytes(buf, bytes),
        Value::Int(i) => buf.extend_from_slice(i.to_string().as_bytes()),
        Value::Uint(u) => buf.extend_from_slice(u.to_string().as_bytes()),
        Value::Float(f) => buf.extend_from_slice(f.to_string().as_bytes()),
        Value::Bool(b) => buf.extend_from_slice(if *b { b"true" } else { b"false" }),
    }
}

/// Append `s` as a double-quoted literal restricted to printable ASCII.
///
/// Quotes and backslashes get backslash escapes, common control characters
/// get their short forms, every other control or non-ASCII character becomes
/// `\uXXXX` (or `\UXXXXXXXX` beyond the basic plane).
pub(crate) fn write_quoted_str(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for c in s.chars() {
        match c {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            ' '..='~' => buf.push(c as u8),
            _ => write_unicode_escape(buf, c),
        }
    }
    buf.push(b'"');
}

/// Append bytes as a double-quoted literal, treating them as text.
/// Non-printable bytes render as `\xHH`.
fn write_quoted_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.push(b'"');
    for &b in bytes {
        match b {
            b'"' => buf.extend_from_slice(b"\\\""),
            b'\\' => buf.extend_from_slice(b"\\\\"),
            b'\n' => buf.extend_from_slice(b"\\n"),
            b'\r' => buf.extend_from_slice(b"\\r"),
            b'\t' => buf.extend_from_slice(b"\\t"),
            0x20..=0x7e => buf.push(b),
            _ => {
                buf.extend_from_slice(b"\\x");
                buf.push(HEX[(b >> 4) as usize]);
                buf.push(HEX[(b & 0xf) as usize]);
            }
        }
    }
    buf.push(b'"');
}

fn write_unicode_escape(buf: &mut Vec<u8>, c: char) {
    let code = c as u32;
    if code <= 0xffff {
        buf.extend_from_slice(b"\\u");
        for shift in [12u32, 8, 4, 0] {
            buf.push(HEX[((code >> shift) & 0xf) as usize]);
        }
    } else {
        buf.extend_from_slice(b"\\U");
        for shift in [28u32, 24, 20, 16, 12, 8, 4, 0] {
            buf.push(HEX[((code >> shift) & 0xf) as usize]);
        }
    }
}
