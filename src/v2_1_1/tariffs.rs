//! OCPI 2.1.1 tariffs module.

use super::enums::TariffDimensionType;
use crate::common::{DayOfWeek, EnergyMix};
use crate::primitives::{BoundedString, DisplayText, Number, Timestamp, Url};

ocpi_object! {
    pub struct PriceComponent / PriceComponentPartialUpdate {
        kind as "type": required TariffDimensionType,
        price: required Number,
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
        min_power: optional Number,
        max_power: optional Number,
        min_duration: optional i64,
        max_duration: optional i64,
        day_of_week: list DayOfWeek,
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
        id: required BoundedString<36>,
        currency: required BoundedString<3>,
        tariff_alt_text: list DisplayText,
        tariff_alt_url: optional Url,
        elements: required_list TariffElement,
        energy_mix: optional EnergyMix,
        last_updated: required Timestamp,
    }
}
