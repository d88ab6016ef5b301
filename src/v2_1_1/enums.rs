//! OCPI 2.1.1 enumerations.

ocpi_enum! {
    pub enum Capability {
        ChargingProfileCapable => "CHARGING_PROFILE_CAPABLE",
        CreditCardPayable => "CREDIT_CARD_PAYABLE",
        RemoteStartStopCapable => "REMOTE_START_STOP_CAPABLE",
        Reservable => "RESERVABLE",
        RfidReader => "RFID_READER",
        UnlockCapable => "UNLOCK_CAPABLE",
    }
}

ocpi_enum! {
    pub enum ConnectorFormat {
        Socket => "SOCKET",
        Cable => "CABLE",
    }
}

ocpi_enum! {
    /// Plug or socket standard of a connector
    pub enum ConnectorType {
        Chademo => "CHADEMO",
        DomesticA => "DOMESTIC_A",
        DomesticB => "DOMESTIC_B",
        DomesticC => "DOMESTIC_C",
        DomesticD => "DOMESTIC_D",
        DomesticE => "DOMESTIC_E",
        DomesticF => "DOMESTIC_F",
        DomesticG => "DOMESTIC_G",
        DomesticH => "DOMESTIC_H",
        DomesticI => "DOMESTIC_I",
        DomesticJ => "DOMESTIC_J",
        DomesticK => "DOMESTIC_K",
        DomesticL => "DOMESTIC_L",
        Iec60309_2Single16 => "IEC_60309_2_single_16",
        Iec60309_2Three16 => "IEC_60309_2_three_16",
        Iec60309_2Three32 => "IEC_60309_2_three_32",
        Iec60309_2Three64 => "IEC_60309_2_three_64",
        Iec62196T1 => "IEC_62196_T1",
        Iec62196T1Combo => "IEC_62196_T1_COMBO",
        Iec62196T2 => "IEC_62196_T2",
        Iec62196T2Combo => "IEC_62196_T2_COMBO",
        Iec62196T3A => "IEC_62196_T3A",
        Iec62196T3C => "IEC_62196_T3C",
        TeslaR => "TESLA_R",
        TeslaS => "TESLA_S",
    }
}

ocpi_enum! {
    pub enum Facility {
        Hotel => "HOTEL",
        Restaurant => "RESTAURANT",
        Cafe => "CAFE",
        Mall => "MALL",
        Supermarket => "SUPERMARKET",
        Sport => "SPORT",
        RecreationArea => "RECREATION_AREA",
        Nature => "NATURE",
        Museum => "MUSEUM",
        BusStop => "BUS_STOP",
        TaxiStand => "TAXI_STAND",
        TrainStation => "TRAIN_STATION",
        Airport => "AIRPORT",
        CarpoolParking => "CARPOOL_PARKING",
        FuelStation => "FUEL_STATION",
        Wifi => "WIFI",
    }
}

ocpi_enum! {
    pub enum LocationType {
        OnStreet => "ON_STREET",
        ParkingGarage => "PARKING_GARAGE",
        UndergroundGarage => "UNDERGROUND_GARAGE",
        ParkingLot => "PARKING_LOT",
        Other => "OTHER",
        Unknown => "UNKNOWN",
    }
}

ocpi_enum! {
    pub enum ParkingRestriction {
        EvOnly => "EV_ONLY",
        Plugged => "PLUGGED",
        Disabled => "DISABLED",
        Customers => "CUSTOMERS",
        Motorcycles => "MOTORCYCLES",
    }
}

ocpi_enum! {
    pub enum PowerType {
        Ac1Phase => "AC_1_PHASE",
        Ac3Phase => "AC_3_PHASE",
        Dc => "DC",
    }
}

ocpi_enum! {
    pub enum ImageCategory {
        Charger => "CHARGER",
        Entrance => "ENTRANCE",
        Location => "LOCATION",
        Network => "NETWORK",
        Operator => "OPERATOR",
        Other => "OTHER",
        Owner => "OWNER",
    }
}

ocpi_enum! {
    pub enum AuthMethod {
        AuthRequest => "AUTH_REQUEST",
        Whitelist => "WHITELIST",
    }
}

ocpi_enum! {
    pub enum CdrDimensionType {
        Energy => "ENERGY",
        Flat => "FLAT",
        MaxCurrent => "MAX_CURRENT",
        MinCurrent => "MIN_CURRENT",
        ParkingTime => "PARKING_TIME",
        Time => "TIME",
    }
}

ocpi_enum! {
    pub enum SessionStatus {
        Active => "ACTIVE",
        Completed => "COMPLETED",
        Invalid => "INVALID",
        Pending => "PENDING",
    }
}

ocpi_enum! {
    pub enum TariffDimensionType {
        Energy => "ENERGY",
        Flat => "FLAT",
        ParkingTime => "PARKING_TIME",
        Time => "TIME",
    }
}

ocpi_enum! {
    pub enum TokenType {
        Other => "OTHER",
        Rfid => "RFID",
    }
}

ocpi_enum! {
    pub enum WhitelistType {
        Always => "ALWAYS",
        Allowed => "ALLOWED",
        AllowedOffline => "ALLOWED_OFFLINE",
        Never => "NEVER",
    }
}

ocpi_enum! {
    /// Outcome of a real-time authorization request
    pub enum Allowed {
        Allowed => "ALLOWED",
        Blocked => "BLOCKED",
        Expired => "EXPIRED",
        NoCredit => "NO_CREDIT",
        NotAllowed => "NOT_ALLOWED",
    }
}
