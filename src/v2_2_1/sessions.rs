//! OCPI 2.2.1 sessions module.

use super::cdrs::{CdrToken, ChargingPeriod};
use super::enums::{AuthMethod, ProfileType, SessionStatus};
use crate::primitives::{BoundedString, CiString, Number, Price, Timestamp};

ocpi_object! {
    /// A charging session.
    ///
    /// Unlike 2.1.1, the location is referenced by id rather than embedded.
    pub struct Session / SessionPartialUpdate {
        country_code: required CiString<2>,
        party_id: required CiString<3>,
        id: required CiString<36>,
        start_date_time: required Timestamp,
        end_date_time: optional Timestamp,
        kwh: required Number,
        cdr_token: required CdrToken,
        auth_method: required AuthMethod,
        authorization_reference: optional CiString<36>,
        location_id: required CiString<36>,
        evse_uid: required CiString<36>,
        connector_id: required CiString<36>,
        meter_id: optional BoundedString<255>,
        currency: required BoundedString<3>,
        charging_periods: list ChargingPeriod,
        total_cost: optional Price,
        status: required SessionStatus,
        last_updated: required Timestamp,
    }
}

ocpi_object! {
    /// Driver preferences sent for a running session
    pub struct ChargingPreferences / ChargingPreferencesPartialUpdate {
        profile_type: required ProfileType,
        departure_time: optional Timestamp,
        energy_need: optional Number,
        discharge_allowed: optional bool,
    }
}
