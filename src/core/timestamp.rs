//! Fixed-width timestamp rendering
//!
//! Renders `YYYY-MM-DDTHH:MM:SS.mmmZ` digit by digit rather than through a
//! strftime-style formatter, so the width and shape of the field can never
//! drift with locale or formatter versions.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Append the UTC timestamp in `YYYY-MM-DDTHH:MM:SS.mmmZ` form.
pub(crate) fn write_timestamp(buf: &mut Vec<u8>, t: &DateTime<Utc>) {
    // Leap seconds surface as subsecond values >= 1000ms; clamp to keep the
    // field width fixed.
    let millis = t.timestamp_subsec_millis().min(999);

    write_fixed(buf, t.year().unsigned_abs(), 4);
    buf.push(b'-');
    write_fixed(buf, t.month(), 2);
    buf.push(b'-');
    write_fixed(buf, t.day(), 2);
    buf.push(b'T');
    write_fixed(buf, t.hour(), 2);
    buf.push(b':');
    write_fixed(buf, t.minute(), 2);
    buf.push(b':');
    write_fixed(buf, t.second(), 2);
    buf.push(b'.');
    write_fixed(buf, millis, 3);
    buf.push(b'Z');
}

/// Append a decimal number, zero-padded on the left to `width` digits.
/// Values wider than `width` keep all their digits.
fn write_fixed(buf: &mut Vec<u8>, mut value: u32, mut width: usize) {
    let mut digits = [0u8; 10];
    let mut pos = digits.len() - 1;

    while value >= 10 || width > 1 {
        width = width.saturating_sub(1);
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        pos -= 1;
    }
    digits[pos] = b'0' + value as u8;
    buf.extend_from_slice(&digits[pos..]);
}
