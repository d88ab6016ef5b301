//! OCPI 2.2.1 locations module.

use super::enums::{
    Capability, ConnectorFormat, ConnectorType, Facility, ImageCategory, ParkingRestriction,
    ParkingType, PowerType, TokenType,
};
use crate::common::{
    AdditionalGeoLocation, EnergyMix, GeoLocation, Hours, Status, StatusSchedule,
};
use crate::primitives::{BoundedString, CiString, DisplayText, Timestamp, Url};

ocpi_object! {
    /// Token, or group of tokens, allowed to see an unpublished location
    pub struct PublishTokenType / PublishTokenTypePartialUpdate {
        uid: optional CiString<36>,
        kind as "type": optional TokenType,
        visual_number: optional BoundedString<64>,
        issuer: optional BoundedString<64>,
        group_id: optional CiString<36>,
    }
}

ocpi_object! {
    pub struct Image / ImagePartialUpdate {
        url: required Url,
        thumbnail: optional Url,
        category: required ImageCategory,
        kind as "type": required CiString<4>,
        width: optional i64,
        height: optional i64,
    }
}

ocpi_object! {
    pub struct BusinessDetails / BusinessDetailsPartialUpdate {
        name: required BoundedString<100>,
        website: optional Url,
        logo: optional Image,
    }
}

ocpi_object! {
    pub struct Connector / ConnectorPartialUpdate {
        id: required CiString<36>,
        standard: required ConnectorType,
        format: required ConnectorFormat,
        power_type: required PowerType,
        max_voltage: required i64,
        max_amperage: required i64,
        max_electric_power: optional i64,
        tariff_ids: list CiString<36>,
        terms_and_conditions: optional Url,
        last_updated: required Timestamp,
    }
}

ocpi_object! {
    pub struct Evse / EvsePartialUpdate {
        uid: required CiString<36>,
        evse_id: optional CiString<48>,
        status: required Status,
        status_schedule: optional StatusSchedule,
        capabilities: list Capability,
        connectors: required_list Connector,
        floor_level: optional BoundedString<4>,
        coordinates: optional GeoLocation,
        physical_reference: optional BoundedString<16>,
        directions: list DisplayText,
        parking_restrictions: list ParkingRestriction,
        images: list Image,
        last_updated: required Timestamp,
    }
}

ocpi_object! {
    /// A charging site owned by the party identified by `country_code` and `party_id`
    pub struct Location / LocationPartialUpdate {
        country_code: required CiString<2>,
        party_id: required CiString<3>,
        id: required CiString<36>,
        publish: required bool,
        publish_allowed_to: list PublishTokenType,
        name: optional BoundedString<255>,
        address: required BoundedString<45>,
        city: required BoundedString<45>,
        postal_code: optional BoundedString<10>,
        state: optional BoundedString<20>,
        country: required BoundedString<3>,
        coordinates: required GeoLocation,
        related_locations: list AdditionalGeoLocation,
        parking_type: optional ParkingType,
        evses: list Evse,
        directions: list DisplayText,
        operator: optional BusinessDetails,
        suboperator: optional BusinessDetails,
        owner: optional BusinessDetails,
        facilities: list Facility,
        time_zone: required BoundedString<255>,
        opening_times: optional Hours,
        charging_when_closed: optional bool,
        images: list Image,
        energy_mix: optional EnergyMix,
        last_updated: required Timestamp,
    }
}
