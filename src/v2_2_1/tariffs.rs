//! OCPI 2.2.1 tariffs module.

use super::enums::{ReservationRestrictionType, TariffDimensionType, TariffType};
use crate::common::{DayOfWeek, EnergyMix};
use crate::primitives::{BoundedString, CiString, DisplayText, Number, Price, Timestamp, Url};

ocpi_object! {
    pub struct PriceComponent / PriceComponentPartialUpdate {
        kind as "type": required TariffDimensionType,
        price: required Number,
        vat: optional Number,
        step_size: required i64,
    }
}

ocpi_object! {
    /// Conditions under which a tariff element applies
    pub struct TariffRestrictions / TariffRestrictionsPartialUpdate {
        start_time: optional BoundedString<5>,
        end_time: optional BoundedString<5>,
        start_date: optional BoundedString<10>,
        end_date: optional BoundedString<10>,
        min_kwh: optional Number,
        max_kwh: optional Number,
        min_current: optional Number,
        max_current: optional Number,
        min_power: optional Number,
        max_power: optional Number,
        min_duration: optional i64,
        max_duration: optional i64,
        day_of_week: list DayOfWeek,
        reservation: optional ReservationRestrictionType,
    }
}

ocpi_object! {
    pub struct TariffElement / TariffElementPartialUpdate {
        price_components: required_list PriceComponent,
        restrictions: optional TariffRestrictions,
    }
}

ocpi_object! {
    pub struct Tariff / TariffPartialUpdate {
        country_code: required CiString<2>,
        party_id: required CiString<3>,
        id: required CiString<36>,
        currency: required BoundedString<3>,
        kind as "type": optional TariffType,
        tariff_alt_text: list DisplayText,
        tariff_alt_url: optional Url,
        min_price: optional Price,
        max_price: optional Price,
        elements: required_list TariffElement,
        start_date_time: optional Timestamp,
        end_date_time: optional Timestamp,
        energy_mix: optional EnergyMix,
        last_updated: required Timestamp,
    }
}
