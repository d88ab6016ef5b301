//! The validation entry point shared by every OCPI type.
//!
//! [`Validate`] is the only way to build a value from raw input: primitives,
//! enumerations, composite objects and their partial-update siblings all
//! implement it. [`ObjectReader`] is the one routine composite objects use to
//! pull fields out of a JSON object, so the required/optional policy and the
//! error path bookkeeping live in a single place.

use crate::config::ValidationContext;
use crate::error::{OcpiResult, ValidationError, ValidationResult};
use serde_json::{Map, Value};

/// Construction gate for a validated, canonical-form value.
pub trait Validate: Sized {
    /// Composite values wrap their errors in a nested failure when read as a field
    const COMPOSITE: bool = false;

    /// Validate raw input and build the canonical value
    fn validate(raw: &Value, ctx: &ValidationContext) -> ValidationResult<Self>;

    /// Decode JSON text and validate it in one step
    fn from_json_str(json: &str, ctx: &ValidationContext) -> OcpiResult<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Ok(Self::validate(&raw, ctx)?)
    }
}

impl Validate for bool {
    fn validate(raw: &Value, _ctx: &ValidationContext) -> ValidationResult<Self> {
        raw.as_bool()
            .ok_or_else(|| ValidationError::type_mismatch("boolean", raw))
    }
}

impl Validate for i64 {
    fn validate(raw: &Value, _ctx: &ValidationContext) -> ValidationResult<Self> {
        raw.as_i64()
            .ok_or_else(|| ValidationError::type_mismatch("integer", raw))
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(raw: &Value, ctx: &ValidationContext) -> ValidationResult<Self> {
        let items = raw
            .as_array()
            .ok_or_else(|| ValidationError::type_mismatch("array", raw))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::validate(item, ctx).map_err(|e| ValidationError::nested(format!("[{index}]"), e))
            })
            .collect()
    }
}

/// Field accessor over a raw JSON object.
///
/// Absent keys and explicit `null` are treated alike. Keys that no field
/// declares are ignored.
pub struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    ctx: &'a ValidationContext,
}

impl<'a> ObjectReader<'a> {
    pub fn new(raw: &'a Value, ctx: &'a ValidationContext) -> ValidationResult<Self> {
        let object = raw
            .as_object()
            .ok_or_else(|| ValidationError::type_mismatch("object", raw))?;
        Ok(Self { object, ctx })
    }

    /// Raw value of a key, with `null` folded into absence
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    /// Keys present in the object that `known` does not list
    pub fn unknown_keys(&self, known: &[&str]) -> Vec<&'a str> {
        self.object
            .keys()
            .map(String::as_str)
            .filter(|k| !known.contains(k))
            .collect()
    }

    /// A field that must be present and valid
    pub fn required<T: Validate>(&self, key: &str) -> ValidationResult<T> {
        let raw = self
            .raw(key)
            .ok_or_else(|| ValidationError::missing_required(key))?;
        self.read(key, raw)
    }

    /// A field that may be absent but must be valid when present
    pub fn optional<T: Validate>(&self, key: &str) -> ValidationResult<Option<T>> {
        self.raw(key).map(|raw| self.read(key, raw)).transpose()
    }

    /// A list field that defaults to empty when absent
    pub fn list<T: Validate>(&self, key: &str) -> ValidationResult<Vec<T>> {
        Ok(self.optional(key)?.unwrap_or_default())
    }

    /// A list field that must be present (it may still be empty)
    pub fn required_list<T: Validate>(&self, key: &str) -> ValidationResult<Vec<T>> {
        self.required(key)
    }

    fn read<T: Validate>(&self, key: &str, raw: &Value) -> ValidationResult<T> {
        T::validate(raw, self.ctx).map_err(|e| {
            if T::COMPOSITE {
                ValidationError::nested(key, e)
            } else {
                e.at(key)
            }
        })
    }
}
