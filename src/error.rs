//! Error types for OCPI validation.
//!
//! Every failure produced by this crate is a normal, typed result. Validation
//! errors carry the path of the failing value relative to the record being
//! validated, the constraint that was violated, and the offending raw value.

use serde_json::Value;

/// Main error type for crate-level operations.
///
/// Wraps validation failures together with the decoding and configuration
/// errors that can occur around them.
#[derive(Debug, thiserror::Error)]
pub enum OcpiError {
    /// The record was decoded but does not satisfy the schema
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON text could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Input could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors for OCPI values and objects.
///
/// `path` is relative to the value that raised the error. The object reader
/// prefixes field names while the error travels upwards, and composite
/// fields and list elements are wrapped in [`ValidationError::NestedValidationFailure`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Raw value has the wrong shape for the expected kind
    #[error("Value{} has invalid type, expected {expected}, got {actual}", describe_path(.path))]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// Value has the right shape but breaks a format rule
    #[error("Value{} has invalid {constraint} format: {value}", describe_path(.path))]
    FormatViolation {
        path: String,
        constraint: String,
        value: String,
    },

    /// Text exceeds the maximum length of its type
    #[error(
        "Value{} length must be lower or equal to {max}, got {actual}",
        describe_path(.path)
    )]
    LengthViolation {
        path: String,
        max: usize,
        actual: usize,
        value: String,
    },

    /// Required field is absent from a structured record
    #[error("Required field '{field}' is missing{}", describe_path(.path))]
    MissingRequiredField { path: String, field: String },

    /// String outside the closed set of an enumeration
    #[error("Value{} has invalid value '{value}', allowed values: {allowed:?}", describe_path(.path))]
    InvalidVariant {
        path: String,
        value: String,
        allowed: Vec<String>,
    },

    /// A nested composite or list element failed validation
    #[error("Invalid value at '{path}': {source}")]
    NestedValidationFailure {
        path: String,
        #[source]
        source: Box<ValidationError>,
    },
}

fn describe_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at '{path}'")
    }
}

fn join_path(prefix: &str, suffix: &str) -> String {
    if prefix.is_empty() {
        suffix.to_string()
    } else if suffix.is_empty() {
        prefix.to_string()
    } else if suffix.starts_with('[') {
        format!("{prefix}{suffix}")
    } else {
        format!("{prefix}.{suffix}")
    }
}

/// Short JSON kind name used in type mismatch messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ValidationError {
    /// Create a type mismatch error for a raw value
    pub fn type_mismatch(expected: impl Into<String>, actual: &Value) -> Self {
        Self::TypeMismatch {
            path: String::new(),
            expected: expected.into(),
            actual: json_type_name(actual).to_string(),
        }
    }

    /// Create a format violation error
    pub fn format_violation(constraint: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FormatViolation {
            path: String::new(),
            constraint: constraint.into(),
            value: value.into(),
        }
    }

    /// Create a length violation error
    pub fn length_violation(max: usize, value: &str) -> Self {
        Self::LengthViolation {
            path: String::new(),
            max,
            actual: value.chars().count(),
            value: value.to_string(),
        }
    }

    /// Create a missing required field error
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            path: String::new(),
            field: field.into(),
        }
    }

    /// Create an invalid enumeration value error
    pub fn invalid_variant(value: impl Into<String>, allowed: &[&str]) -> Self {
        Self::InvalidVariant {
            path: String::new(),
            value: value.into(),
            allowed: allowed.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Wrap an error raised inside a nested composite or list element
    pub fn nested(path: impl Into<String>, source: ValidationError) -> Self {
        Self::NestedValidationFailure {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Prefix the error's path with an enclosing field name or index
    pub fn at(self, segment: &str) -> Self {
        match self {
            Self::TypeMismatch {
                path,
                expected,
                actual,
            } => Self::TypeMismatch {
                path: join_path(segment, &path),
                expected,
                actual,
            },
            Self::FormatViolation {
                path,
                constraint,
                value,
            } => Self::FormatViolation {
                path: join_path(segment, &path),
                constraint,
                value,
            },
            Self::LengthViolation {
                path,
                max,
                actual,
                value,
            } => Self::LengthViolation {
                path: join_path(segment, &path),
                max,
                actual,
                value,
            },
            Self::MissingRequiredField { path, field } => Self::MissingRequiredField {
                path: join_path(segment, &path),
                field,
            },
            Self::InvalidVariant {
                path,
                value,
                allowed,
            } => Self::InvalidVariant {
                path: join_path(segment, &path),
                value,
                allowed,
            },
            Self::NestedValidationFailure { path, source } => Self::NestedValidationFailure {
                path: join_path(segment, &path),
                source,
            },
        }
    }

    /// Path of this error, relative to the value that produced it
    pub fn path(&self) -> &str {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::FormatViolation { path, .. }
            | Self::LengthViolation { path, .. }
            | Self::MissingRequiredField { path, .. }
            | Self::InvalidVariant { path, .. }
            | Self::NestedValidationFailure { path, .. } => path,
        }
    }

    /// Full dotted location of the failing value.
    ///
    /// For a missing field this includes the field name itself, e.g.
    /// `evses[0].connectors[1].last_updated`.
    pub fn location(&self) -> String {
        match self {
            Self::NestedValidationFailure { path, source } => join_path(path, &source.location()),
            Self::MissingRequiredField { path, field } => join_path(path, field),
            other => other.path().to_string(),
        }
    }

    /// Innermost error, with every nesting layer removed
    pub fn root_cause(&self) -> &ValidationError {
        match self {
            Self::NestedValidationFailure { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Errors raised while loading validation settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// A setting holds a value that cannot be interpreted
    #[error("Invalid value '{value}' for setting {name}: expected {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: String,
    },

    /// Settings document could not be decoded
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

// Result type aliases for convenience
pub type OcpiResult<T> = Result<T, OcpiError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
