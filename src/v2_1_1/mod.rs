//! OCPI 2.1.1 object schemas.
//!
//! Identifiers are plain case-sensitive strings in this version and resources
//! carry no `country_code`/`party_id` ownership fields.

pub mod cdrs;
pub mod enums;
pub mod locations;
pub mod sessions;
pub mod tariffs;
pub mod tokens;

pub use cdrs::{CdrDimension, CdrDimensionPartialUpdate, ChargingPeriod, ChargingPeriodPartialUpdate};
pub use locations::{
    BusinessDetails, BusinessDetailsPartialUpdate, Connector, ConnectorPartialUpdate, Evse,
    EvsePartialUpdate, Image, ImagePartialUpdate, Location, LocationPartialUpdate,
};
pub use sessions::{Session, SessionPartialUpdate};
pub use tariffs::{
    PriceComponent, PriceComponentPartialUpdate, Tariff, TariffElement,
    TariffElementPartialUpdate, TariffPartialUpdate, TariffRestrictions,
    TariffRestrictionsPartialUpdate,
};
pub use tokens::{
    AuthorizationInfo, AuthorizationInfoPartialUpdate, LocationReferences,
    LocationReferencesPartialUpdate, Token, TokenPartialUpdate,
};

use crate::config::ValidationContext;
use crate::error::ValidationResult;
use crate::registry::{ResourceKey, ResourceKind};
use crate::validate::Validate;
use serde::Serialize;
use serde_json::Value;

/// Any top-level 2.1.1 resource
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Location(Location),
    Evse(Evse),
    Connector(Connector),
    Session(Session),
    Tariff(Tariff),
    Token(Token),
}

impl Resource {
    pub fn validate(
        kind: ResourceKind,
        raw: &Value,
        ctx: &ValidationContext,
    ) -> ValidationResult<Self> {
        Ok(match kind {
            ResourceKind::Location => Self::Location(Location::validate(raw, ctx)?),
            ResourceKind::Evse => Self::Evse(Evse::validate(raw, ctx)?),
            ResourceKind::Connector => Self::Connector(Connector::validate(raw, ctx)?),
            ResourceKind::Session => Self::Session(Session::validate(raw, ctx)?),
            ResourceKind::Tariff => Self::Tariff(Tariff::validate(raw, ctx)?),
            ResourceKind::Token => Self::Token(Token::validate(raw, ctx)?),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Location(_) => ResourceKind::Location,
            Self::Evse(_) => ResourceKind::Evse,
            Self::Connector(_) => ResourceKind::Connector,
            Self::Session(_) => ResourceKind::Session,
            Self::Tariff(_) => ResourceKind::Tariff,
            Self::Token(_) => ResourceKind::Token,
        }
    }

    pub fn key(&self) -> ResourceKey {
        match self {
            Self::Location(v) => ResourceKey::new(v.id.as_str()),
            Self::Evse(v) => ResourceKey::new(v.uid.as_str()),
            Self::Connector(v) => ResourceKey::new(v.id.as_str()),
            Self::Session(v) => ResourceKey::new(v.id.as_str()),
            Self::Tariff(v) => ResourceKey::new(v.id.as_str()),
            Self::Token(v) => ResourceKey::new(v.uid.as_str()),
        }
    }

    /// Apply a patch of the same kind; `None` when the kinds differ
    pub fn merged(&self, patch: &ResourcePatch) -> Option<Self> {
        match (self, patch) {
            (Self::Location(v), ResourcePatch::Location(p)) => Some(Self::Location(v.merged(p))),
            (Self::Evse(v), ResourcePatch::Evse(p)) => Some(Self::Evse(v.merged(p))),
            (Self::Connector(v), ResourcePatch::Connector(p)) => {
                Some(Self::Connector(v.merged(p)))
            }
            (Self::Session(v), ResourcePatch::Session(p)) => Some(Self::Session(v.merged(p))),
            (Self::Tariff(v), ResourcePatch::Tariff(p)) => Some(Self::Tariff(v.merged(p))),
            (Self::Token(v), ResourcePatch::Token(p)) => Some(Self::Token(v.merged(p))),
            _ => None,
        }
    }
}

/// Partial update of any top-level 2.1.1 resource
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourcePatch {
    Location(LocationPartialUpdate),
    Evse(EvsePartialUpdate),
    Connector(ConnectorPartialUpdate),
    Session(SessionPartialUpdate),
    Tariff(TariffPartialUpdate),
    Token(TokenPartialUpdate),
}

impl ResourcePatch {
    pub fn validate(
        kind: ResourceKind,
        raw: &Value,
        ctx: &ValidationContext,
    ) -> ValidationResult<Self> {
        Ok(match kind {
            ResourceKind::Location => Self::Location(LocationPartialUpdate::validate(raw, ctx)?),
            ResourceKind::Evse => Self::Evse(EvsePartialUpdate::validate(raw, ctx)?),
            ResourceKind::Connector => {
                Self::Connector(ConnectorPartialUpdate::validate(raw, ctx)?)
            }
            ResourceKind::Session => Self::Session(SessionPartialUpdate::validate(raw, ctx)?),
            ResourceKind::Tariff => Self::Tariff(TariffPartialUpdate::validate(raw, ctx)?),
            ResourceKind::Token => Self::Token(TokenPartialUpdate::validate(raw, ctx)?),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Location(_) => ResourceKind::Location,
            Self::Evse(_) => ResourceKind::Evse,
            Self::Connector(_) => ResourceKind::Connector,
            Self::Session(_) => ResourceKind::Session,
            Self::Tariff(_) => ResourceKind::Tariff,
            Self::Token(_) => ResourceKind::Token,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Location(p) => p.is_empty(),
            Self::Evse(p) => p.is_empty(),
            Self::Connector(p) => p.is_empty(),
            Self::Session(p) => p.is_empty(),
            Self::Tariff(p) => p.is_empty(),
            Self::Token(p) => p.is_empty(),
        }
    }
}
