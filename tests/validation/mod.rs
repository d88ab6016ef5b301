//! Validation tests module.
//!
//! Each submodule covers one concern of the validation layer, against both
//! protocol versions where they differ.

pub mod locations;
pub mod partial_updates;
pub mod sessions;
pub mod tokens;
