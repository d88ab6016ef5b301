//! Location, EVSE and Connector validation tests.
//!
//! Both protocol versions are exercised from the same example site. Errors
//! raised deep inside the tree must name the full path of the failing value.

use serde_json::json;

use crate::common::builders::{V211, V221};
use crate::common::{ctx, init_logging};
use crate::{assert_error_location, assert_validation_error, assert_validation_success};

use ocpi_schema::common::{EnergySourceCategory, Status};
use ocpi_schema::config::ValidationContext;
use ocpi_schema::error::ValidationError;
use ocpi_schema::validate::Validate;
use ocpi_schema::{v2_1_1, v2_2_1};

mod v2_1_1_locations {
    use super::*;

    #[test]
    fn test_valid_location() {
        init_logging();
        let location =
            assert_validation_success!(v2_1_1::Location::validate(&V211::location().build(), &ctx()));

        assert_eq!(location.id.as_str(), "LOC1");
        assert_eq!(location.kind, v2_1_1::enums::LocationType::OnStreet);
        assert_eq!(location.evses.len(), 1);
        assert_eq!(location.evses[0].connectors.len(), 2);
        assert_eq!(location.operator.as_ref().unwrap().name.as_str(), "BeCharged");
        assert_eq!(location.facilities.len(), 2);
    }

    #[test]
    fn test_identifiers_are_not_case_folded() {
        let raw = V211::evse().with("uid", json!("Evse-ABC")).build();
        let evse = v2_1_1::Evse::validate(&raw, &ValidationContext::uppercase()).unwrap();
        assert_eq!(evse.uid.as_str(), "Evse-ABC");
    }

    #[test]
    fn test_power_type_is_version_specific() {
        let raw = V211::connector()
            .with("power_type", json!("AC_2_PHASE"))
            .build();
        let result = v2_1_1::Connector::validate(&raw, &ctx());
        assert_validation_error!(result.clone(), ValidationError::InvalidVariant { .. });
        assert_error_location!(result, "power_type");

        let raw = V221::connector()
            .with("power_type", json!("AC_2_PHASE"))
            .build();
        assert_validation_success!(v2_2_1::Connector::validate(&raw, &ctx()));
    }

    #[test]
    fn test_missing_connector_field_in_nested_tree() {
        let raw = V211::location()
            .without_at("/evses/0/connectors/1/last_updated")
            .build();
        let result = v2_1_1::Location::validate(&raw, &ctx());
        assert_error_location!(result.clone(), "evses[0].connectors[1].last_updated");

        let error = result.unwrap_err();
        assert!(matches!(
            error.root_cause(),
            ValidationError::MissingRequiredField { field, .. } if field == "last_updated"
        ));
    }

    #[test]
    fn test_regular_hours_error_location() {
        let raw = V211::location()
            .with_at("/opening_times/regular_hours/1/weekday", json!("TUESDAY"))
            .build();
        assert_error_location!(
            v2_1_1::Location::validate(&raw, &ctx()),
            "opening_times.regular_hours[1].weekday"
        );
    }

    #[test]
    fn test_address_length_limit() {
        let raw = V211::location()
            .with("address", json!("x".repeat(46)))
            .build();
        let result = v2_1_1::Location::validate(&raw, &ctx());
        assert_validation_error!(
            result.clone(),
            ValidationError::LengthViolation { max: 45, actual: 46, .. }
        );
        assert_error_location!(result, "address");
    }

    #[test]
    fn test_status_schedule_is_validated() {
        let raw = V211::evse()
            .with_at("/status_schedule/status", json!("BROKEN"))
            .build();
        assert_error_location!(
            v2_1_1::Evse::validate(&raw, &ctx()),
            "status_schedule.status"
        );
    }
}

mod v2_2_1_locations {
    use super::*;

    #[test]
    fn test_valid_location() {
        init_logging();
        let location =
            assert_validation_success!(v2_2_1::Location::validate(&V221::location().build(), &ctx()));

        assert_eq!(location.country_code.as_str(), "be");
        assert_eq!(location.party_id.as_str(), "bec");
        assert_eq!(location.id.as_str(), "loc1");
        assert!(location.publish);
        assert_eq!(location.evses.len(), 2);
        assert_eq!(location.evses[1].status, Status::Reserved);
        assert_eq!(location.evses[0].connectors[1].tariff_ids[0].as_str(), "13");

        let mix = location.energy_mix.as_ref().unwrap();
        assert!(mix.is_green_energy);
        assert_eq!(mix.energy_sources[0].source, EnergySourceCategory::GeneralGreen);
        assert_eq!(mix.environ_impact.len(), 2);
        assert!(location.opening_times.as_ref().unwrap().twentyfourseven);
    }

    #[test]
    fn test_uppercase_context() {
        let raw = V221::location()
            .with("country_code", json!("be"))
            .with("party_id", json!("bec"))
            .build();
        let location = v2_2_1::Location::validate(&raw, &ValidationContext::uppercase()).unwrap();

        assert_eq!(location.country_code.as_str(), "BE");
        assert_eq!(location.party_id.as_str(), "BEC");
        assert_eq!(location.evses[0].evse_id.as_ref().unwrap().as_str(), "BE*BEC*E041503001");
    }

    #[test]
    fn test_differently_cased_inputs_are_equal() {
        let upper = V221::location().with("id", json!("LOC1")).build();
        let lower = V221::location().with("id", json!("loc1")).build();
        assert_eq!(
            v2_2_1::Location::validate(&upper, &ctx()).unwrap(),
            v2_2_1::Location::validate(&lower, &ctx()).unwrap()
        );
    }

    #[test]
    fn test_country_code_length() {
        let raw = V221::location().with("country_code", json!("BEL")).build();
        assert_validation_error!(
            v2_2_1::Location::validate(&raw, &ctx()),
            ValidationError::LengthViolation { max: 2, .. }
        );
    }

    #[test]
    fn test_non_ascii_identifier_is_rejected() {
        let raw = V221::location()
            .with_at("/evses/1/uid", json!("3257\u{e9}"))
            .build();
        let result = v2_2_1::Location::validate(&raw, &ctx());
        assert_error_location!(result.clone(), "evses[1].uid");
        assert!(matches!(
            result.unwrap_err().root_cause(),
            ValidationError::FormatViolation { .. }
        ));
    }

    #[test]
    fn test_missing_max_voltage_in_second_evse() {
        let raw = V221::location()
            .without_at("/evses/1/connectors/0/max_voltage")
            .build();
        assert_error_location!(
            v2_2_1::Location::validate(&raw, &ctx()),
            "evses[1].connectors[0].max_voltage"
        );
    }

    #[test]
    fn test_energy_source_error_location() {
        let raw = V221::location()
            .with_at("/energy_mix/energy_sources/3/source", json!("PEAT"))
            .build();
        assert_error_location!(
            v2_2_1::Location::validate(&raw, &ctx()),
            "energy_mix.energy_sources[3].source"
        );
    }

    #[test]
    fn test_first_failure_in_declaration_order() {
        let raw = V221::location()
            .with("id", json!(12))
            .without("city")
            .build();
        assert_error_location!(v2_2_1::Location::validate(&raw, &ctx()), "id");
    }

    #[test]
    fn test_null_and_unknown_fields() {
        let raw = V221::location()
            .with("name", json!(null))
            .with("x_vendor_extension", json!({"a": 1}))
            .build();
        let location = v2_2_1::Location::validate(&raw, &ctx()).unwrap();
        assert!(location.name.is_none());

        let out = serde_json::to_value(&location).unwrap();
        assert!(out.get("name").is_none());
        assert!(out.get("x_vendor_extension").is_none());
    }

    #[test]
    fn test_required_null_is_missing() {
        let raw = V221::location().with("publish", json!(null)).build();
        assert_validation_error!(
            v2_2_1::Location::validate(&raw, &ctx()),
            ValidationError::MissingRequiredField { .. }
        );
    }

    #[test]
    fn test_canonical_output_is_stable() {
        let raw = V221::location()
            .with_at("/evses/0/last_updated", json!("2015-06-28T08:12:01.250+00:00"))
            .build();
        let location = v2_2_1::Location::validate(&raw, &ctx()).unwrap();
        let canonical = serde_json::to_value(&location).unwrap();
        assert_eq!(canonical["evses"][0]["last_updated"], json!("2015-06-28T08:12:01Z"));

        let again = v2_2_1::Location::validate(&canonical, &ctx()).unwrap();
        assert_eq!(location, again);
        assert_eq!(serde_json::to_value(&again).unwrap(), canonical);
    }
}
