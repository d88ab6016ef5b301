//! OCPI `URL` type: a `string(255)` holding a URL.

use crate::config::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::primitives::BoundedString;
use crate::validate::Validate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A URL of at most 255 characters.
///
/// Only the length and text checks of `string(255)` apply; the URI grammar
/// itself is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url(BoundedString<255>);

impl Url {
    pub const MAX_LENGTH: usize = 255;

    pub fn new(value: String) -> ValidationResult<Self> {
        Ok(Self(BoundedString::new(value)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0.into_string()
    }
}

impl Validate for Url {
    fn validate(raw: &Value, ctx: &ValidationContext) -> ValidationResult<Self> {
        Ok(Self(BoundedString::validate(raw, ctx)?))
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(BoundedString::deserialize(deserializer)?))
    }
}

impl TryFrom<&str> for Url {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
