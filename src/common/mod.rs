//! Version-agnostic leaf composites and enumerations.
//!
//! Both protocol versions build on these records unchanged. Anything whose
//! layout differs between 2.1.1 and 2.2.1 lives in the version modules.

pub mod enums;
pub mod locations;

pub use enums::{DayOfWeek, EnergySourceCategory, EnvironmentalImpactCategory, Status};
pub use locations::{
    AdditionalGeoLocation, AdditionalGeoLocationPartialUpdate, EnergyMix, EnergyMixPartialUpdate,
    EnergySource, EnergySourcePartialUpdate, EnvironmentalImpact,
    EnvironmentalImpactPartialUpdate, ExceptionalPeriod, ExceptionalPeriodPartialUpdate,
    GeoLocation, GeoLocationPartialUpdate, Hours, HoursPartialUpdate, RegularHours,
    RegularHoursPartialUpdate, StatusSchedule, StatusSchedulePartialUpdate,
};
