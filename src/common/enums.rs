//! Enumerations shared by both protocol versions.

ocpi_enum! {
    /// Status of an EVSE
    pub enum Status {
        Available => "AVAILABLE",
        Blocked => "BLOCKED",
        Charging => "CHARGING",
        Inoperative => "INOPERATIVE",
        OutOfOrder => "OUTOFORDER",
        Planned => "PLANNED",
        Removed => "REMOVED",
        Reserved => "RESERVED",
        Unknown => "UNKNOWN",
    }
}

ocpi_enum! {
    /// Source of generated energy
    pub enum EnergySourceCategory {
        Nuclear => "NUCLEAR",
        GeneralFossil => "GENERAL_FOSSIL",
        Coal => "COAL",
        Gas => "GAS",
        GeneralGreen => "GENERAL_GREEN",
        Solar => "SOLAR",
        Wind => "WIND",
        Water => "WATER",
    }
}

ocpi_enum! {
    /// Category of environmental impact
    pub enum EnvironmentalImpactCategory {
        NuclearWaste => "NUCLEAR_WASTE",
        CarbonDioxide => "CARBON_DIOXIDE",
    }
}

ocpi_enum! {
    pub enum DayOfWeek {
        Monday => "MONDAY",
        Tuesday => "TUESDAY",
        Wednesday => "WEDNESDAY",
        Thursday => "THURSDAY",
        Friday => "FRIDAY",
        Saturday => "SATURDAY",
        Sunday => "SUNDAY",
    }
}
