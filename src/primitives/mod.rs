//! Primitive OCPI types.
//!
//! Immutable value objects for the scalar and small structured types used by
//! every OCPI module. Each one enforces its invariants at construction, so an
//! invalid or non-canonical value cannot exist.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use ocpi_schema::config::ValidationContext;
//! use ocpi_schema::primitives::{CiString, Timestamp};
//! use ocpi_schema::validate::Validate;
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = ValidationContext::default();
//!     let id = CiString::<36>::validate(&json!("LOC1"), &ctx)?;
//!     let at = Timestamp::validate(&json!("2024-01-15T10:30:00+00:00"), &ctx)?;
//!     assert_eq!(id.as_str(), "loc1");
//!     assert_eq!(at.as_str(), "2024-01-15T10:30:00Z");
//!     Ok(())
//! }
//! ```

mod bounded_string;
mod ci_string;
mod display_text;
mod number;
mod price;
mod timestamp;
mod url;

pub use bounded_string::BoundedString;
pub use ci_string::CiString;
pub use display_text::DisplayText;
pub use number::Number;
pub use price::Price;
pub use timestamp::Timestamp;
pub use url::Url;
