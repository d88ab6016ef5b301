//! OCPI `number`: any JSON integer or float, stored as `f64`.

use crate::config::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(f64);

impl Number {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Validate for Number {
    fn validate(raw: &Value, _ctx: &ValidationContext) -> ValidationResult<Self> {
        raw.as_f64()
            .map(Self)
            .ok_or_else(|| ValidationError::type_mismatch("number", raw))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
