//! OCPI `DisplayText`: a language-tagged piece of text.

use crate::config::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::validate::Validate;
use serde::Serialize;
use serde_json::{Map, Value};

/// Localized text with a required `language` and `text`.
///
/// ## Validation Rules
///
/// - Input must be an object holding `language` and `text` strings; a `null`
///   value counts as missing
/// - `text` must not exceed 512 characters
/// - Any other keys are accepted unchecked and kept in `extra`, so they
///   serialize back out unchanged
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayText {
    pub language: String,
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DisplayText {
    pub const MAX_TEXT_LENGTH: usize = 512;

    pub fn new(language: impl Into<String>, text: impl Into<String>) -> ValidationResult<Self> {
        let text = text.into();
        Self::validate_text(&text)?;
        Ok(Self {
            language: language.into(),
            text,
            extra: Map::new(),
        })
    }

    fn validate_text(text: &str) -> ValidationResult<()> {
        if text.chars().count() > Self::MAX_TEXT_LENGTH {
            return Err(ValidationError::length_violation(Self::MAX_TEXT_LENGTH, text).at("text"));
        }
        Ok(())
    }

    fn string_field(object: &Map<String, Value>, key: &str) -> ValidationResult<String> {
        let raw = object
            .get(key)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ValidationError::missing_required(key))?;
        raw.as_str()
            .map(str::to_string)
            .ok_or_else(|| ValidationError::type_mismatch("string", raw).at(key))
    }
}

impl Validate for DisplayText {
    fn validate(raw: &Value, _ctx: &ValidationContext) -> ValidationResult<Self> {
        let object = raw
            .as_object()
            .ok_or_else(|| ValidationError::type_mismatch("object", raw))?;

        let language = Self::string_field(object, "language")?;
        let text = Self::string_field(object, "text")?;
        Self::validate_text(&text)?;

        let extra = object
            .iter()
            .filter(|(k, _)| k.as_str() != "language" && k.as_str() != "text")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            language,
            text,
            extra,
        })
    }
}
