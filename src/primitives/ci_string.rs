//! Case-insensitive bounded string.
//!
//! OCPI `CiString(n)`: printable ASCII of at most `n` characters. Case is
//! folded once, at construction, in the direction the [`ValidationContext`]
//! names. The original case is not kept, so two values built from the same
//! text in different cases compare and serialize identically.

use crate::config::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::validate::Validate;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A validated, case-folded OCPI identifier of at most `N` characters.
///
/// ## Validation Rules
///
/// - Must be text
/// - Every character must be printable ASCII (`' '..='~'`)
/// - Length must not exceed `N`
///
/// ## Examples
///
/// ```rust
/// use ocpi_schema::config::ValidationContext;
/// use ocpi_schema::primitives::CiString;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ctx = ValidationContext::lowercase();
///     let party = CiString::<3>::new("TNM", &ctx)?;
///     assert_eq!(party.as_str(), "tnm");
///
///     assert!(CiString::<4>::new("café", &ctx).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CiString<const N: usize>(String);

impl<const N: usize> CiString<N> {
    /// Maximum length in characters
    pub const MAX_LENGTH: usize = N;

    /// Create a new CiString, folding its case per `ctx`.
    pub fn new(value: &str, ctx: &ValidationContext) -> ValidationResult<Self> {
        Self::validate_format(value)?;
        Ok(Self(ctx.fold_case(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if !value.chars().all(|c| (' '..='~').contains(&c)) {
            return Err(ValidationError::format_violation("printable ASCII", value));
        }
        if value.len() > N {
            return Err(ValidationError::length_violation(N, value));
        }
        Ok(())
    }
}

impl<const N: usize> Validate for CiString<N> {
    fn validate(raw: &Value, ctx: &ValidationContext) -> ValidationResult<Self> {
        let text = raw
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch("string", raw))?;
        Self::new(text, ctx)
    }
}

impl<const N: usize> fmt::Display for CiString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const N: usize> AsRef<str> for CiString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> Serialize for CiString<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
