use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stored value that may arrive as a number or as text.
///
/// Records created by the store hold numbers, but records written back by the
/// edit form hold the same values as strings (`"3"` instead of `3`). Both
/// shapes are accepted and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Integer value of the scalar, read the way `parseInt` reads it: floats are
    /// truncated and strings contribute their leading integer prefix.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Scalar::Integer(value) => Some(*value),
            Scalar::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            Scalar::Float(_) => None,
            Scalar::Text(text) => parse_int(text),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

/// Parses the leading integer of `text`, skipping leading whitespace.
///
/// `"1995,2004"` yields `1995`, `" -7 años"` yields `-7` and `"abc"` yields `None`.
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}
