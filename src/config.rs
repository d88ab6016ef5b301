//! Validation settings and the context threaded through every validation call.
//!
//! The only setting that changes validation output is the case preference of
//! case-insensitive strings. It travels as an explicit [`ValidationContext`]
//! value, so validations stay referentially transparent and can run on any
//! number of threads at once.
//!
//! # Example Usage
//!
//! ```rust
//! use ocpi_schema::config::{CasePreference, ValidationConfig};
//! use ocpi_schema::registry::ProtocolVersion;
//!
//! let config = ValidationConfig::builder()
//!     .with_case_preference(CasePreference::Uppercase)
//!     .with_default_version(ProtocolVersion::V2_1_1)
//!     .build();
//!
//! let ctx = config.context();
//! assert_eq!(ctx.fold_case("NL"), "NL");
//! ```

use crate::error::{ConfigurationError, ValidationResult};
use crate::registry::ProtocolVersion;
use log::trace;
use serde::{Deserialize, Serialize};

/// Environment variable holding the case preference flag
pub const CASE_PREFERENCE_VAR: &str = "CI_STRING_LOWERCASE_PREFERENCE";

/// Environment variable holding the default protocol version
pub const VERSION_VAR: &str = "OCPI_VERSION";

fn default_true() -> bool {
    true
}

/// Direction case-insensitive strings are folded to at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePreference {
    #[default]
    Lowercase,
    Uppercase,
}

/// Read-only context consumed by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationContext {
    case_preference: CasePreference,
}

impl ValidationContext {
    pub fn new(case_preference: CasePreference) -> Self {
        Self { case_preference }
    }

    /// Context folding case-insensitive strings to lowercase
    pub fn lowercase() -> Self {
        Self::new(CasePreference::Lowercase)
    }

    /// Context folding case-insensitive strings to uppercase
    pub fn uppercase() -> Self {
        Self::new(CasePreference::Uppercase)
    }

    pub fn case_preference(&self) -> CasePreference {
        self.case_preference
    }

    /// Fold ASCII text to the preferred case.
    pub fn fold_case(&self, value: &str) -> String {
        match self.case_preference {
            CasePreference::Lowercase => value.to_ascii_lowercase(),
            CasePreference::Uppercase => value.to_ascii_uppercase(),
        }
    }
}

/// Settings record for the validation layer.
///
/// Loaded once at process start; [`ValidationConfig::context`] derives the
/// context value handed to validation calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Fold case-insensitive strings to lowercase (`true`) or uppercase (`false`)
    #[serde(default = "default_true")]
    pub ci_string_lowercase_preference: bool,

    /// Protocol version assumed when a caller does not name one
    #[serde(default)]
    pub default_version: ProtocolVersion,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            ci_string_lowercase_preference: true,
            default_version: ProtocolVersion::default(),
        }
    }
}

impl ValidationConfig {
    /// Start building a configuration from defaults
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::default()
    }

    /// Load settings from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings from any key lookup, typically the environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(CASE_PREFERENCE_VAR) {
            config.ci_string_lowercase_preference = parse_bool(CASE_PREFERENCE_VAR, &raw)?;
        }

        if let Some(raw) = lookup(VERSION_VAR) {
            config.default_version =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigurationError::InvalidValue {
                        name: VERSION_VAR.to_string(),
                        value: raw.clone(),
                        expected: "2.1.1 or 2.2.1".to_string(),
                    })?;
        }

        trace!("Loaded validation settings: {:?}", config);
        Ok(config)
    }

    /// Decode settings from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(json)?;
        trace!("Loaded validation settings: {:?}", config);
        Ok(config)
    }

    pub fn case_preference(&self) -> CasePreference {
        if self.ci_string_lowercase_preference {
            CasePreference::Lowercase
        } else {
            CasePreference::Uppercase
        }
    }

    /// Context value to pass to validation calls
    pub fn context(&self) -> ValidationContext {
        ValidationContext::new(self.case_preference())
    }

    /// The version a caller asked for, or [`ValidationConfig::default_version`]
    /// when it named none
    pub fn version_or_default(&self, requested: Option<&str>) -> ValidationResult<ProtocolVersion> {
        match requested {
            Some(raw) => raw.parse(),
            None => Ok(self.default_version),
        }
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigurationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigurationError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string(),
            expected: "a boolean".to_string(),
        }),
    }
}

/// Fluent builder for [`ValidationConfig`].
#[derive(Debug, Default)]
pub struct ValidationConfigBuilder {
    config: ValidationConfig,
}

impl ValidationConfigBuilder {
    pub fn with_case_preference(mut self, preference: CasePreference) -> Self {
        self.config.ci_string_lowercase_preference = preference == CasePreference::Lowercase;
        self
    }

    pub fn with_default_version(mut self, version: ProtocolVersion) -> Self {
        self.config.default_version = version;
        self
    }

    pub fn build(self) -> ValidationConfig {
        self.config
    }
}
