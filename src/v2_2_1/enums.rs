//! OCPI 2.2.1 enumerations.

ocpi_enum! {
    pub enum Capability {
        ChargingProfileCapable => "CHARGING_PROFILE_CAPABLE",
        ChargingPreferencesCapable => "CHARGING_PREFERENCES_CAPABLE",
        ChipCardSupport => "CHIP_CARD_SUPPORT",
        ContactlessCardSupport => "CONTACTLESS_CARD_SUPPORT",
        CreditCardPayable => "CREDIT_CARD_PAYABLE",
        DebitCardPayable => "DEBIT_CARD_PAYABLE",
        PedTerminal => "PED_TERMINAL",
        RemoteStartStopCapable => "REMOTE_START_STOP_CAPABLE",
        Reservable => "RESERVABLE",
        RfidReader => "RFID_READER",
        StartSessionConnectorRequired => "START_SESSION_CONNECTOR_REQUIRED",
        TokenGroupCapable => "TOKEN_GROUP_CAPABLE",
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
        Chaoji => "CHAOJI",
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
        DomesticM => "DOMESTIC_M",
        DomesticN => "DOMESTIC_N",
        DomesticO => "DOMESTIC_O",
        GbtAc => "GBT_AC",
        GbtDc => "GBT_DC",
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
        Nema5_20 => "NEMA_5_20",
        Nema6_30 => "NEMA_6_30",
        Nema6_50 => "NEMA_6_50",
        Nema10_30 => "NEMA_10_30",
        Nema10_50 => "NEMA_10_50",
        Nema14_30 => "NEMA_14_30",
        Nema14_50 => "NEMA_14_50",
        PantographBottomUp => "PANTOGRAPH_BOTTOM_UP",
        PantographTopDown => "PANTOGRAPH_TOP_DOWN",
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
        BikeSharing => "BIKE_SHARING",
        BusStop => "BUS_STOP",
        TaxiStand => "TAXI_STAND",
        TramStop => "TRAM_STOP",
        MetroStation => "METRO_STATION",
        TrainStation => "TRAIN_STATION",
        Airport => "AIRPORT",
        ParkingLot => "PARKING_LOT",
        CarpoolParking => "CARPOOL_PARKING",
        FuelStation => "FUEL_STATION",
        Wifi => "WIFI",
    }
}

ocpi_enum! {
    pub enum ParkingType {
        AlongMotorway => "ALONG_MOTORWAY",
        ParkingGarage => "PARKING_GARAGE",
        ParkingLot => "PARKING_LOT",
        OnDriveway => "ON_DRIVEWAY",
        OnStreet => "ON_STREET",
        UndergroundGarage => "UNDERGROUND_GARAGE",
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
        Ac2Phase => "AC_2_PHASE",
        Ac2PhaseSplit => "AC_2_PHASE_SPLIT",
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
    pub enum TokenType {
        AdHocUser => "AD_HOC_USER",
        AppUser => "APP_USER",
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
    pub enum AllowedType {
        Allowed => "ALLOWED",
        Blocked => "BLOCKED",
        Expired => "EXPIRED",
        NoCredit => "NO_CREDIT",
        NotAllowed => "NOT_ALLOWED",
    }
}

ocpi_enum! {
    pub enum AuthMethod {
        AuthRequest => "AUTH_REQUEST",
        Command => "COMMAND",
        Whitelist => "WHITELIST",
    }
}

ocpi_enum! {
    pub enum CdrDimensionType {
        Current => "CURRENT",
        Energy => "ENERGY",
        EnergyExport => "ENERGY_EXPORT",
        EnergyImport => "ENERGY_IMPORT",
        MaxCurrent => "MAX_CURRENT",
        MinCurrent => "MIN_CURRENT",
        MaxPower => "MAX_POWER",
        MinPower => "MIN_POWER",
        ParkingTime => "PARKING_TIME",
        Power => "POWER",
        ReservationTime => "RESERVATION_TIME",
        StateOfCharge => "STATE_OF_CHARGE",
        Time => "TIME",
    }
}

ocpi_enum! {
    pub enum SessionStatus {
        Active => "ACTIVE",
        Completed => "COMPLETED",
        Invalid => "INVALID",
        Pending => "PENDING",
        Reservation => "RESERVATION",
    }
}

ocpi_enum! {
    /// Charging profile a driver can ask for
    pub enum ProfileType {
        Cheap => "CHEAP",
        Fast => "FAST",
        Green => "GREEN",
        Regular => "REGULAR",
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
    pub enum TariffType {
        AdHocPayment => "AD_HOC_PAYMENT",
        ProfileCheap => "PROFILE_CHEAP",
        ProfileFast => "PROFILE_FAST",
        ProfileGreen => "PROFILE_GREEN",
        Regular => "REGULAR",
    }
}

ocpi_enum! {
    pub enum ReservationRestrictionType {
        Reservation => "RESERVATION",
        ReservationExpires => "RESERVATION_EXPIRES",
    }
}
