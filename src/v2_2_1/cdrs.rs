//! OCPI 2.2.1 CDR building blocks reused by sessions.

use super::enums::{CdrDimensionType, TokenType};
use crate::primitives::{CiString, Number, Timestamp};

ocpi_object! {
    /// The token used to start a session, as recorded on a CDR
    pub struct CdrToken / CdrTokenPartialUpdate {
        country_code: required CiString<2>,
        party_id: required CiString<3>,
        uid: required CiString<36>,
        kind as "type": required TokenType,
        contract_id: required CiString<36>,
    }
}

ocpi_object! {
    pub struct CdrDimension / CdrDimensionPartialUpdate {
        kind as "type": required CdrDimensionType,
        volume: required Number,
    }
}

ocpi_object! {
    pub struct ChargingPeriod / ChargingPeriodPartialUpdate {
        start_date_time: required Timestamp,
        dimensions: required_list CdrDimension,
        tariff_id: optional CiString<36>,
    }
}
