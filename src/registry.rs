//! Resource registry: dispatch raw records to the schema for a protocol
//! version and resource kind.
//!
//! This is the entry point used by outer layers (HTTP handlers, storage) that
//! only know the version and module name of a record at runtime.

use crate::config::ValidationContext;
use crate::error::{OcpiResult, ValidationError, ValidationResult};
use crate::{v2_1_1, v2_2_1};
use log::{debug, trace};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

ocpi_enum! {
    /// Supported OCPI protocol versions
    pub enum ProtocolVersion {
        V2_1_1 => "2.1.1",
        V2_2_1 => "2.2.1",
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::V2_2_1
    }
}

/// Top-level OCPI resource types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Location,
    Evse,
    Connector,
    Session,
    Tariff,
    Token,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        Self::Location,
        Self::Evse,
        Self::Connector,
        Self::Session,
        Self::Tariff,
        Self::Token,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Evse => "evse",
            Self::Connector => "connector",
            Self::Session => "session",
            Self::Tariff => "tariff",
            Self::Token => "token",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ValidationError;

    /// Accepts singular and plural module names in any case
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == singular)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                ValidationError::invalid_variant(value, &allowed)
            })
    }
}

/// Storage identity of a validated resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_id: Option<String>,
    pub id: String,
}

impl ResourceKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            country_code: None,
            party_id: None,
            id: id.into(),
        }
    }

    /// Key of a resource owned by a party
    pub fn scoped(
        country_code: impl Into<String>,
        party_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            country_code: Some(country_code.into()),
            party_id: Some(party_id.into()),
            id: id.into(),
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.country_code, &self.party_id) {
            (Some(country_code), Some(party_id)) => {
                write!(f, "{}/{}/{}", country_code, party_id, self.id)
            }
            _ => write!(f, "{}", self.id),
        }
    }
}

/// A validated resource of either protocol version
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OcpiObject {
    V2_1_1(v2_1_1::Resource),
    V2_2_1(v2_2_1::Resource),
}

impl OcpiObject {
    pub fn version(&self) -> ProtocolVersion {
        match self {
            Self::V2_1_1(_) => ProtocolVersion::V2_1_1,
            Self::V2_2_1(_) => ProtocolVersion::V2_2_1,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::V2_1_1(resource) => resource.kind(),
            Self::V2_2_1(resource) => resource.kind(),
        }
    }

    pub fn key(&self) -> ResourceKey {
        match self {
            Self::V2_1_1(resource) => resource.key(),
            Self::V2_2_1(resource) => resource.key(),
        }
    }

    /// Apply a patch to a copy of this object.
    ///
    /// Returns `None` when the patch targets another version or kind.
    pub fn merged(&self, patch: &OcpiPatch) -> Option<Self> {
        match (self, patch) {
            (Self::V2_1_1(resource), OcpiPatch::V2_1_1(patch)) => {
                resource.merged(patch).map(Self::V2_1_1)
            }
            (Self::V2_2_1(resource), OcpiPatch::V2_2_1(patch)) => {
                resource.merged(patch).map(Self::V2_2_1)
            }
            _ => None,
        }
    }
}

/// A validated partial update of either protocol version
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OcpiPatch {
    V2_1_1(v2_1_1::ResourcePatch),
    V2_2_1(v2_2_1::ResourcePatch),
}

impl OcpiPatch {
    pub fn version(&self) -> ProtocolVersion {
        match self {
            Self::V2_1_1(_) => ProtocolVersion::V2_1_1,
            Self::V2_2_1(_) => ProtocolVersion::V2_2_1,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::V2_1_1(patch) => patch.kind(),
            Self::V2_2_1(patch) => patch.kind(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::V2_1_1(patch) => patch.is_empty(),
            Self::V2_2_1(patch) => patch.is_empty(),
        }
    }
}

/// Validate a full resource record
pub fn validate_object(
    version: ProtocolVersion,
    kind: ResourceKind,
    raw: &Value,
    ctx: &ValidationContext,
) -> ValidationResult<OcpiObject> {
    let result = match version {
        ProtocolVersion::V2_1_1 => v2_1_1::Resource::validate(kind, raw, ctx).map(OcpiObject::V2_1_1),
        ProtocolVersion::V2_2_1 => v2_2_1::Resource::validate(kind, raw, ctx).map(OcpiObject::V2_2_1),
    };

    match &result {
        Ok(object) => trace!("Validated OCPI {} {} {}", version, kind, object.key()),
        Err(e) => debug!(
            "Rejected OCPI {} {} at '{}': {}",
            version,
            kind,
            e.location(),
            e.root_cause()
        ),
    }
    result
}

/// Validate a partial update record
pub fn validate_patch(
    version: ProtocolVersion,
    kind: ResourceKind,
    raw: &Value,
    ctx: &ValidationContext,
) -> ValidationResult<OcpiPatch> {
    let result = match version {
        ProtocolVersion::V2_1_1 => {
            v2_1_1::ResourcePatch::validate(kind, raw, ctx).map(OcpiPatch::V2_1_1)
        }
        ProtocolVersion::V2_2_1 => {
            v2_2_1::ResourcePatch::validate(kind, raw, ctx).map(OcpiPatch::V2_2_1)
        }
    };

    match &result {
        Ok(patch) if patch.is_empty() => trace!("Empty OCPI {} {} patch", version, kind),
        Ok(_) => trace!("Validated OCPI {} {} patch", version, kind),
        Err(e) => debug!(
            "Rejected OCPI {} {} patch at '{}': {}",
            version,
            kind,
            e.location(),
            e.root_cause()
        ),
    }
    result
}

/// Decode JSON text and validate it as a full resource
pub fn validate_object_str(
    version: ProtocolVersion,
    kind: ResourceKind,
    json: &str,
    ctx: &ValidationContext,
) -> OcpiResult<OcpiObject> {
    let raw: Value = serde_json::from_str(json)?;
    Ok(validate_object(version, kind, &raw, ctx)?)
}
