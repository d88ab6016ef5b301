//! OCPI `DateTime`: an RFC 3339 timestamp in canonical form.
//!
//! Canonical form is second precision. A UTC offset is rendered as a trailing
//! `Z`, and any other offset is kept as written. A timestamp without an offset
//! is taken to be UTC, so the canonical form does not record whether UTC was
//! implied or explicit.

use crate::config::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::validate::Validate;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Layouts accepted for timestamps that carry no offset
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A validated timestamp.
///
/// ## Examples
///
/// ```rust
/// use ocpi_schema::primitives::Timestamp;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ts = Timestamp::parse("2024-01-15T10:30:00.123+00:00")?;
///     assert_eq!(ts.as_str(), "2024-01-15T10:30:00Z");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Timestamp {
    instant: DateTime<FixedOffset>,
    canonical: String,
}

impl Timestamp {
    /// Parse and canonicalize an RFC 3339 timestamp.
    ///
    /// A trailing `Z` is read as `+00:00`. Fractional seconds are truncated.
    /// Leap seconds (`:60`) are rejected.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let normalized = match raw.strip_suffix('Z') {
            Some(head) => format!("{head}+00:00"),
            None => raw.to_string(),
        };

        let instant = DateTime::parse_from_rfc3339(&normalized)
            .ok()
            .or_else(|| Self::parse_naive(&normalized))
            .ok_or_else(|| ValidationError::format_violation("RFC 3339 timestamp", raw))?;

        // chrono encodes a leap second as a nanosecond count past one second
        if instant.nanosecond() >= 1_000_000_000 {
            return Err(ValidationError::format_violation("RFC 3339 timestamp", raw));
        }

        Ok(Self::from_datetime(instant))
    }

    fn parse_naive(value: &str) -> Option<DateTime<FixedOffset>> {
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|naive| naive.and_utc().fixed_offset())
    }

    /// Build a canonical timestamp from an already parsed date-time
    pub fn from_datetime(value: DateTime<FixedOffset>) -> Self {
        let instant = value.with_nanosecond(0).unwrap_or(value);
        let canonical = if instant.offset().local_minus_utc() == 0 {
            instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
        } else {
            instant.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
        };
        Self { instant, canonical }
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }
}

impl Validate for Timestamp {
    fn validate(raw: &Value, _ctx: &ValidationContext) -> ValidationResult<Self> {
        let text = raw
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch("string", raw))?;
        Self::parse(text)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(value.fixed_offset())
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Timestamp {}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.canonical.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
