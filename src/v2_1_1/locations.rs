//! OCPI 2.1.1 locations module: Location, EVSE and Connector.

use super::enums::{
    Capability, ConnectorFormat, ConnectorType, Facility, ImageCategory, LocationType,
    ParkingRestriction, PowerType,
};
use crate::common::{
    AdditionalGeoLocation, EnergyMix, GeoLocation, Hours, Status, StatusSchedule,
};
use crate::primitives::{BoundedString, DisplayText, Timestamp, Url};

ocpi_object! {
    /// Reference to an image, with an optional thumbnail
    pub struct Image / ImagePartialUpdate {
        url: required Url,
        thumbnail: optional Url,
        category: required ImageCategory,
        /// Image file type, e.g. `jpeg`
        kind as "type": required BoundedString<4>,
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
    /// A single socket or cable on an EVSE
    pub struct Connector / ConnectorPartialUpdate {
        id: required BoundedString<36>,
        standard: required ConnectorType,
        format: required ConnectorFormat,
        power_type: required PowerType,
        voltage: required i64,
        amperage: required i64,
        tariff_id: required BoundedString<36>,
        terms_and_conditions: optional Url,
        last_updated: required Timestamp,
    }
}

ocpi_object! {
    /// A charging point that can serve one vehicle at a time
    pub struct Evse / EvsePartialUpdate {
        uid: required BoundedString<39>,
        evse_id: optional BoundedString<48>,
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
    /// A charging site with one or more EVSEs
    pub struct Location / LocationPartialUpdate {
        id: required BoundedString<39>,
        kind as "type": required LocationType,
        name: optional BoundedString<255>,
        address: required BoundedString<45>,
        city: required BoundedString<45>,
        postal_code: optional BoundedString<10>,
        /// ISO 3166 alpha-3 country code
        country: required BoundedString<3>,
        coordinates: required GeoLocation,
        related_locations: list AdditionalGeoLocation,
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
