//! Small utility helpers for JSON extraction and text fitting.
//!
//! The JSON helpers never fail: a missing key, a `null`, or a value of the
//! wrong type all read as "absent" so callers can substitute defaults.

use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Extract a string value from a JSON object, falling back to a default.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
/// - `default`: Text to use when the key is missing, `null`, or not a string.
///
/// Output:
/// - The stored string or `default`.
#[must_use]
pub fn str_or(v: &Value, key: &str, default: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_owned()
}

/// What: Extract an optional string, treating `null` and non-strings as absent.
#[must_use]
pub fn opt_str(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// What: Extract an unsigned integer by key.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(u64)` when a usable value is found, else `None`.
///
/// Details:
/// - Accepts JSON `u64`, non-negative `i64`, or a string that parses as `u64`.
#[must_use]
pub fn u64_of(v: &Value, key: &str) -> Option<u64> {
    let n = v.get(key)?;
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    if let Some(i) = n.as_i64()
        && let Ok(u) = u64::try_from(i)
    {
        return Some(u);
    }
    n.as_str().and_then(|s| s.trim().parse::<u64>().ok())
}

/// What: Extract a signed integer (e.g. a year, which may be negative for BCE).
///
/// Details:
/// - Accepts JSON integers, whole floats, or numeric strings.
#[must_use]
pub fn i64_of(v: &Value, key: &str) -> Option<i64> {
    let n = v.get(key)?;
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if let Some(f) = n.as_f64()
        && f.fract() == 0.0
        && f.is_finite()
    {
        #[allow(clippy::cast_possible_truncation)]
        return Some(f as i64);
    }
    n.as_str().and_then(|s| s.trim().parse::<i64>().ok())
}

/// What: Fit text into `width` terminal columns, adding an ellipsis when cut.
///
/// Inputs:
/// - `text`: Text to fit. Newlines are flattened to spaces.
/// - `width`: Available columns.
///
/// Output:
/// - Text whose display width is at most `width`.
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if UnicodeWidthStr::width(flat.as_str()) <= width {
        return flat;
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in flat.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
