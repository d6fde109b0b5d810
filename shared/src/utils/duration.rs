//! Human-readable duration parsing for token lifetimes
//!
//! Accepts a non-negative integer followed by an optional unit:
//! `ms`, `s`, `m`, `h`, `d` or `w`. A bare integer is read as seconds.

use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer, Visitor};
use thiserror::Error;

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s*(ms|s|m|h|d|w)?\s*$").unwrap()
});

/// Error returned when a duration string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration format: {0:?}")]
    InvalidFormat(String),

    #[error("duration out of range: {0:?}")]
    OutOfRange(String),
}

/// Parse a duration such as `"15m"`, `"7d"`, `"500ms"` or `"900"`
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let captures = DURATION_REGEX
        .captures(input)
        .ok_or_else(|| DurationError::InvalidFormat(input.to_string()))?;

    let amount: u64 = captures[1]
        .parse()
        .map_err(|_| DurationError::OutOfRange(input.to_string()))?;

    let unit_millis: u64 = match captures.get(2).map(|m| m.as_str()) {
        Some("ms") => 1,
        None | Some("s") => 1_000,
        Some("m") => 60 * 1_000,
        Some("h") => 60 * 60 * 1_000,
        Some("d") => 24 * 60 * 60 * 1_000,
        Some("w") => 7 * 24 * 60 * 60 * 1_000,
        Some(_) => return Err(DurationError::InvalidFormat(input.to_string())),
    };

    amount
        .checked_mul(unit_millis)
        .map(Duration::from_millis)
        .ok_or_else(|| DurationError::OutOfRange(input.to_string()))
}

/// Serde adapter for `#[serde(deserialize_with = "...")]`
///
/// Strings go through [`parse_duration`]; integers are seconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    struct DurationVisitor;

    impl<'de> Visitor<'de> for DurationVisitor {
        type Value = Duration;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a duration such as \"15m\", \"7d\" or a number of seconds")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Duration, E> {
            parse_duration(value).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Duration, E> {
            Ok(Duration::from_secs(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Duration, E> {
            u64::try_from(value)
                .map(Duration::from_secs)
                .map_err(|_| E::custom(format!("negative duration: {}", value)))
        }
    }

    deserializer.deserialize_any(DurationVisitor)
}
