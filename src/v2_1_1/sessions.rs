//! OCPI 2.1.1 sessions module.

use super::cdrs::ChargingPeriod;
use super::enums::{AuthMethod, SessionStatus};
use super::locations::Location;
use crate::primitives::{BoundedString, Number, Timestamp};

ocpi_object! {
    /// A charging session, embedding the full location it takes place at
    pub struct Session / SessionPartialUpdate {
        id: required BoundedString<36>,
        start_datetime: required Timestamp,
        end_datetime: optional Timestamp,
        kwh: required Number,
        auth_id: required BoundedString<36>,
        auth_method: required AuthMethod,
        location: required Location,
        meter_id: optional BoundedString<255>,
        currency: required BoundedString<3>,
        charging_periods: list ChargingPeriod,
        total_cost: optional Number,
        status: required SessionStatus,
        last_updated: required Timestamp,
    }
}
