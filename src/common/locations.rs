//! Leaf composites used by the location, tariff and session schemas of both
//! protocol versions.

use super::enums::{EnergySourceCategory, EnvironmentalImpactCategory, Status};
use crate::primitives::{BoundedString, DisplayText, Number, Timestamp};

ocpi_object! {
    /// Geographic position as decimal degree strings
    pub struct GeoLocation / GeoLocationPartialUpdate {
        latitude: required BoundedString<10>,
        longitude: required BoundedString<11>,
    }
}

ocpi_object! {
    /// A related point of interest, such as an entrance or a parking exit
    pub struct AdditionalGeoLocation / AdditionalGeoLocationPartialUpdate {
        latitude: required BoundedString<10>,
        longitude: required BoundedString<11>,
        name: optional DisplayText,
    }
}

ocpi_object! {
    /// Opening window on one day of the week.
    ///
    /// `weekday` runs from 1 (Monday) to 7 (Sunday); periods are `HH:MM`.
    pub struct RegularHours / RegularHoursPartialUpdate {
        weekday: required i64,
        period_begin: required BoundedString<5>,
        period_end: required BoundedString<5>,
    }
}

ocpi_object! {
    pub struct ExceptionalPeriod / ExceptionalPeriodPartialUpdate {
        period_begin: required Timestamp,
        period_end: required Timestamp,
    }
}

ocpi_object! {
    /// Opening and access hours of a location
    pub struct Hours / HoursPartialUpdate {
        twentyfourseven: required bool,
        regular_hours: list RegularHours,
        exceptional_openings: list ExceptionalPeriod,
        exceptional_closings: list ExceptionalPeriod,
    }
}

ocpi_object! {
    /// Planned status change of an EVSE
    pub struct StatusSchedule / StatusSchedulePartialUpdate {
        period_begin: required Timestamp,
        period_end: optional Timestamp,
        status: required Status,
    }
}

ocpi_object! {
    pub struct EnergySource / EnergySourcePartialUpdate {
        source: required EnergySourceCategory,
        percentage: required Number,
    }
}

ocpi_object! {
    pub struct EnvironmentalImpact / EnvironmentalImpactPartialUpdate {
        category: required EnvironmentalImpactCategory,
        amount: required Number,
    }
}

ocpi_object! {
    /// Composition and environmental impact of the supplied energy
    pub struct EnergyMix / EnergyMixPartialUpdate {
        is_green_energy: required bool,
        energy_sources: list EnergySource,
        environ_impact: list EnvironmentalImpact,
        supplier_name: optional BoundedString<64>,
        energy_product_name: optional BoundedString<64>,
    }
}
