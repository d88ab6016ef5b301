//! OCPI 2.2.1 tokens module.

use super::enums::{AllowedType, ProfileType, TokenType, WhitelistType};
use crate::primitives::{BoundedString, CiString, DisplayText, Timestamp};

ocpi_object! {
    pub struct EnergyContract / EnergyContractPartialUpdate {
        supplier_name: required BoundedString<64>,
        contract_id: optional BoundedString<64>,
    }
}

ocpi_object! {
    pub struct LocationReference / LocationReferencePartialUpdate {
        location_id: required CiString<36>,
        evse_uids: list CiString<36>,
    }
}

ocpi_object! {
    /// An identification token issued by an eMSP
    pub struct Token / TokenPartialUpdate {
        country_code: required CiString<2>,
        party_id: required CiString<3>,
        uid: required CiString<36>,
        kind as "type": required TokenType,
        contract_id: required CiString<36>,
        visual_number: optional BoundedString<64>,
        issuer: required BoundedString<64>,
        group_id: optional CiString<36>,
        valid: required bool,
        whitelist: required WhitelistType,
        language: optional BoundedString<2>,
        default_profile_type: optional ProfileType,
        energy_contract: optional EnergyContract,
        last_updated: required Timestamp,
    }
}

ocpi_object! {
    /// Answer to a real-time authorization request
    pub struct AuthorizationInfo / AuthorizationInfoPartialUpdate {
        allowed: required AllowedType,
        token: required Token,
        location: optional LocationReference,
        authorization_reference: optional CiString<36>,
        info: optional DisplayText,
    }
}
