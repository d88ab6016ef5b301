//! OCPI schema validation library for Rust.
//!
//! Turns untyped OCPI records (Location, EVSE, Connector, Session, Tariff,
//! Token and their building blocks) into validated, canonical-form values,
//! or rejects them with a typed error naming the failing field.
//!
//! # Core Components
//!
//! - [`primitives`] - bounded strings, case-insensitive strings, URL,
//!   timestamp, number, display text and price
//! - [`Validate`] - the single construction gate every type implements
//! - [`v2_1_1`] / [`v2_2_1`] - per-version object schemas, each with a
//!   partial-update sibling
//! - [`registry`] - dispatch by protocol version and resource kind
//!
//! # Quick Start
//!
//! ```rust
//! use ocpi_schema::{ProtocolVersion, ResourceKind, ValidationConfig, validate_object};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = ValidationConfig::default().context();
//!     let raw = json!({
//!         "id": "1",
//!         "standard": "IEC_62196_T2",
//!         "format": "SOCKET",
//!         "power_type": "AC_3_PHASE",
//!         "max_voltage": 230,
//!         "max_amperage": 16,
//!         "last_updated": "2024-01-15T10:30:00.000+00:00"
//!     });
//!     let connector = validate_object(ProtocolVersion::V2_2_1, ResourceKind::Connector, &raw, &ctx)?;
//!     assert_eq!(connector.key().id, "1");
//!     Ok(())
//! }
//! ```

#[macro_use]
mod macros;

pub mod common;
pub mod config;
pub mod error;
pub mod primitives;
pub mod registry;
pub mod v2_1_1;
pub mod v2_2_1;
pub mod validate;

// Re-export commonly used types for convenience
pub use config::{CasePreference, ValidationConfig, ValidationContext};
pub use error::{ConfigurationError, OcpiError, OcpiResult, ValidationError, ValidationResult};
pub use primitives::{BoundedString, CiString, DisplayText, Number, Price, Timestamp, Url};
pub use registry::{
    OcpiObject, OcpiPatch, ProtocolVersion, ResourceKey, ResourceKind, validate_object,
    validate_object_str, validate_patch,
};
pub use validate::{ObjectReader, Validate};
