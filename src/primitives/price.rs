//! OCPI `Price`: an amount excluding VAT, optionally including VAT.

use crate::config::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::primitives::Number;
use crate::validate::Validate;
use serde::Serialize;
use serde_json::{Map, Value};

/// A price with a required `excl_vat` amount.
///
/// `incl_vat` and any other keys are carried through unchecked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub excl_vat: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incl_vat: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Price {
    pub fn new(excl_vat: f64, incl_vat: Option<f64>) -> Self {
        Self {
            excl_vat: Number::new(excl_vat),
            incl_vat: incl_vat.map(Value::from),
            extra: Map::new(),
        }
    }

    /// `incl_vat` as a number, when present and numeric
    pub fn incl_vat_amount(&self) -> Option<f64> {
        self.incl_vat.as_ref().and_then(Value::as_f64)
    }
}

impl Validate for Price {
    fn validate(raw: &Value, ctx: &ValidationContext) -> ValidationResult<Self> {
        let object = raw
            .as_object()
            .ok_or_else(|| ValidationError::type_mismatch("object", raw))?;

        let excl_vat = object
            .get("excl_vat")
            .filter(|v| !v.is_null())
            .ok_or_else(|| ValidationError::missing_required("excl_vat"))?;
        let excl_vat = Number::validate(excl_vat, ctx).map_err(|e| e.at("excl_vat"))?;

        let extra = object
            .iter()
            .filter(|(k, _)| k.as_str() != "excl_vat" && k.as_str() != "incl_vat")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            excl_vat,
            incl_vat: object.get("incl_vat").filter(|v| !v.is_null()).cloned(),
            extra,
        })
    }
}
