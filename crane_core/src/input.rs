//! # Raw Form Input
//!
//! Form controls hand the engine either text or numbers. Numeric fields are
//! coerced before they reach a specification so a stored value is always a
//! finite `f64`: text is read like a lenient float parser (longest numeric
//! prefix wins, `"12.5 t"` reads as `12.5`) and anything unreadable becomes `0`.
//!
//! ```rust
//! use crane_core::input::{coerce_numeric, RawValue};
//!
//! assert_eq!(coerce_numeric("  42.5kg"), 42.5);
//! assert_eq!(coerce_numeric("abc"), 0.0);
//! assert_eq!(RawValue::from(f64::NAN).as_number(), 0.0);
//! ```

/// A value as received from a form control.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Numeric reading of this value, `0` when it has none.
    pub fn as_number(&self) -> f64 {
        match self {
            RawValue::Number(v) if v.is_finite() => *v,
            RawValue::Number(_) => 0.0,
            RawValue::Text(text) => coerce_numeric(text),
        }
    }

    /// Textual reading, used for enum fields.
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Number(v) => v.to_string(),
            RawValue::Text(text) => text.trim().to_string(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Coerce text to a finite number, falling back to `0`.
pub fn coerce_numeric(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let end = numeric_prefix_len(trimmed);
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Length in bytes of the longest `[+-]digits[.digits][e[+-]digits]` prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // A bare "e" is not part of the number
        if j > exp_start {
            i = j;
        }
    }

    i
}
