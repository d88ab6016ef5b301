//! Case-sensitive bounded string.
//!
//! OCPI `string(n)`: printable UTF-8 text of at most `n` characters. The
//! bound is a const generic, so `BoundedString<36>` and `BoundedString<64>`
//! are distinct types.

use crate::config::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::validate::Validate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A validated OCPI string of at most `N` characters.
///
/// ## Validation Rules
///
/// - Must be text (raw bytes must decode as UTF-8)
/// - Length, counted in characters, must not exceed `N`
/// - Case and content are preserved unchanged
///
/// ## Examples
///
/// ```rust
/// use ocpi_schema::primitives::BoundedString;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let name = BoundedString::<10>::new("hello".to_string())?;
///     assert_eq!(name.as_str(), "hello");
///
///     assert!(BoundedString::<5>::new("toolong".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundedString<const N: usize>(String);

impl<const N: usize> BoundedString<N> {
    /// Maximum length in characters
    pub const MAX_LENGTH: usize = N;

    /// Create a new BoundedString with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(BoundedString)` - If the value fits the bound
    /// * `Err(ValidationError::LengthViolation)` - If the value is too long
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::validate_length(&value)?;
        Ok(Self(value))
    }

    /// Create a BoundedString from raw bytes, which must be valid UTF-8.
    pub fn from_utf8(bytes: Vec<u8>) -> ValidationResult<Self> {
        let value = String::from_utf8(bytes).map_err(|e| {
            ValidationError::format_violation(
                "UTF-8 string",
                String::from_utf8_lossy(e.as_bytes()).into_owned(),
            )
        })?;
        Self::new(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_length(value: &str) -> ValidationResult<()> {
        if value.chars().count() > N {
            return Err(ValidationError::length_violation(N, value));
        }
        Ok(())
    }
}

impl<const N: usize> Validate for BoundedString<N> {
    fn validate(raw: &Value, _ctx: &ValidationContext) -> ValidationResult<Self> {
        let text = raw
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch("string", raw))?;
        Self::new(text.to_string())
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const N: usize> AsRef<str> for BoundedString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> Serialize for BoundedString<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for BoundedString<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl<const N: usize> TryFrom<String> for BoundedString<N> {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl<const N: usize> TryFrom<&str> for BoundedString<N> {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
