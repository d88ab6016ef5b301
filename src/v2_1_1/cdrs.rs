//! OCPI 2.1.1 CDR building blocks reused by sessions.

use super::enums::CdrDimensionType;
use crate::primitives::{Number, Timestamp};

ocpi_object! {
    pub struct CdrDimension / CdrDimensionPartialUpdate {
        kind as "type": required CdrDimensionType,
        volume: required Number,
    }
}

ocpi_object! {
    /// A slice of a charging session with constant tariff conditions
    pub struct ChargingPeriod / ChargingPeriodPartialUpdate {
        start_date_time: required Timestamp,
        dimensions: required_list CdrDimension,
    }
}
