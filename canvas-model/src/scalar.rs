use serde::{Deserialize, Serialize};
use std::fmt;

/// A JSON scalar kept exactly as it was read from a catalog document.
///
/// Ids and years are not typed consistently in the source data: one record
/// stores `7`, another `"7"`. The raw value is preserved so responses echo the
/// document, and every comparison goes through an explicit normalization
/// step instead of relying on the representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Numeric reading of the value.
    ///
    /// Text is accepted when its trimmed form parses as a finite number;
    /// blank text has no numeric reading.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Integer(value) => Some(*value as f64),
            Scalar::Float(value) => Some(*value).filter(|v| v.is_finite()),
            Scalar::Text(text) => parse_number(text),
        }
    }

    /// Compare against a request token the way catalog ids are matched.
    ///
    /// A numeric value matches any token that reads as the same number
    /// (`7` matches `"7"`, `"07"`, `" 7.0 "` and `"0x7"`). A textual value
    /// only matches identical text.
    pub fn loosely_eq(&self, token: &str) -> bool {
        match self {
            Scalar::Integer(_) | Scalar::Float(_) => {
                match (self.as_number(), parse_number(token)) {
                    (Some(stored), Some(requested)) => stored == requested,
                    _ => false,
                }
            }
            Scalar::Text(text) => text == token,
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let prefixed = trimmed.get(..2).and_then(|prefix| {
        match prefix.to_ascii_lowercase().as_str() {
            "0x" => Some(16),
            "0o" => Some(8),
            "0b" => Some(2),
            _ => None,
        }
    });
    match prefixed {
        Some(radix) => parse_radix(&trimmed[2..], radix),
        None => trimmed.parse::<f64>().ok().filter(|value| value.is_finite()),
    }
}

/// Unsigned digits in `radix`; every character must be a digit.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
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

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}
