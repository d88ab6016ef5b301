//! OCPI 2.1.1 tokens module.

use super::enums::{Allowed, TokenType, WhitelistType};
use crate::primitives::{BoundedString, DisplayText, Timestamp};

ocpi_object! {
    /// An identification token issued by an eMSP
    pub struct Token / TokenPartialUpdate {
        uid: required BoundedString<36>,
        kind as "type": required TokenType,
        auth_id: required BoundedString<36>,
        visual_number: optional BoundedString<64>,
        issuer: required BoundedString<64>,
        valid: required bool,
        whitelist: required WhitelistType,
        /// ISO 639-1 language code
        language: optional BoundedString<2>,
        last_updated: required Timestamp,
    }
}

ocpi_object! {
    pub struct LocationReferences / LocationReferencesPartialUpdate {
        location_id: required BoundedString<39>,
        evse_uids: list BoundedString<39>,
        connector_ids: list BoundedString<36>,
    }
}

ocpi_object! {
    /// Answer to a real-time authorization request
    pub struct AuthorizationInfo / AuthorizationInfoPartialUpdate {
        allowed: required Allowed,
        location: optional LocationReferences,
        info: optional DisplayText,
    }
}
