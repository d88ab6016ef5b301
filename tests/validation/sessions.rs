//! Session validation tests.
//!
//! Sessions embed the CDR building blocks (charging periods, dimensions and,
//! in 2.2.1, the CDR token), so those are covered here as well.

use serde_json::json;

use crate::common::builders::{V211, V221};
use crate::common::ctx;
use crate::{assert_error_location, assert_validation_success};

use ocpi_schema::config::ValidationContext;
use ocpi_schema::error::ValidationError;
use ocpi_schema::validate::Validate;
use ocpi_schema::{v2_1_1, v2_2_1};

#[test]
fn test_v2_2_1_session() {
    let session =
        assert_validation_success!(v2_2_1::Session::validate(&V221::session().build(), &ctx()));

    assert_eq!(session.country_code.as_str(), "nl");
    assert_eq!(session.cdr_token.contract_id.as_str(), "nl-tnm-012204-5");
    assert_eq!(session.cdr_token.kind, v2_2_1::enums::TokenType::Rfid);
    assert_eq!(session.status, v2_2_1::enums::SessionStatus::Pending);
    assert_eq!(session.kwh.value(), 0.0);
    assert_eq!(session.charging_periods[0].tariff_id.as_ref().unwrap().as_str(), "12");

    let cost = session.total_cost.as_ref().unwrap();
    assert_eq!(cost.excl_vat.value(), 0.10);
    assert_eq!(cost.incl_vat_amount(), Some(0.12));
}

#[test]
fn test_missing_last_updated_is_named() {
    let raw = V221::session().without("last_updated").build();

    match v2_2_1::Session::validate(&raw, &ctx()) {
        Err(ValidationError::MissingRequiredField { field, .. }) => {
            assert_eq!(field, "last_updated")
        }
        other => panic!("Expected MissingRequiredField, got {:?}", other),
    }

    // the same record is a valid partial update
    let patch = assert_validation_success!(v2_2_1::SessionPartialUpdate::validate(&raw, &ctx()));
    assert!(patch.last_updated.is_none());
    assert_eq!(patch.id.unwrap().as_str(), "101");
}

#[test]
fn test_reservation_status_only_in_v2_2_1() {
    let raw = V221::session().with("status", json!("RESERVATION")).build();
    assert_validation_success!(v2_2_1::Session::validate(&raw, &ctx()));

    let raw = V211::session().with("status", json!("RESERVATION")).build();
    let result = v2_1_1::Session::validate(&raw, &ctx());
    match &result {
        Err(ValidationError::InvalidVariant { value, allowed, .. }) => {
            assert_eq!(value, "RESERVATION");
            assert_eq!(allowed.len(), 4);
        }
        other => panic!("Expected InvalidVariant, got {:?}", other),
    }
    assert_error_location!(result, "status");
}

#[test]
fn test_dimension_error_location() {
    let raw = V221::session()
        .with_at("/charging_periods/0/dimensions/0/type", json!("KWH"))
        .build();
    assert_error_location!(
        v2_2_1::Session::validate(&raw, &ctx()),
        "charging_periods[0].dimensions[0].type"
    );
}

#[test]
fn test_charging_period_requires_dimensions() {
    let raw = V221::session()
        .without_at("/charging_periods/0/dimensions")
        .build();
    assert_error_location!(
        v2_2_1::Session::validate(&raw, &ctx()),
        "charging_periods[0].dimensions"
    );

    let raw = V221::session()
        .with_at("/charging_periods/0/dimensions", json!([]))
        .build();
    assert_validation_success!(v2_2_1::Session::validate(&raw, &ctx()));
}

#[test]
fn test_total_cost_must_be_price_in_v2_2_1() {
    let raw = V221::session().with("total_cost", json!(2.50)).build();
    let result = v2_2_1::Session::validate(&raw, &ctx());
    match &result {
        Err(ValidationError::TypeMismatch { expected, .. }) => assert_eq!(expected, "object"),
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }
    assert_error_location!(result, "total_cost");
}

#[test]
fn test_session_timestamps_are_canonical() {
    let raw = V221::session()
        .with("start_date_time", json!("2020-03-09T11:17:09.512+01:00"))
        .with("end_date_time", json!("2020-03-09T12:00:00"))
        .build();
    let session = v2_2_1::Session::validate(&raw, &ctx()).unwrap();
    assert_eq!(session.start_date_time.as_str(), "2020-03-09T11:17:09+01:00");
    assert_eq!(session.end_date_time.as_ref().unwrap().as_str(), "2020-03-09T12:00:00Z");
}

#[test]
fn test_v2_1_1_session_embeds_location() {
    let session =
        assert_validation_success!(v2_1_1::Session::validate(&V211::session().build(), &ctx()));

    assert_eq!(session.auth_id.as_str(), "FA54320");
    assert_eq!(session.total_cost.unwrap().value(), 2.50);
    assert_eq!(session.location.evses[0].connectors[0].amperage, 64);
    assert_eq!(
        session.charging_periods[0].dimensions[1].kind,
        v2_1_1::enums::CdrDimensionType::MaxCurrent
    );
}

#[test]
fn test_v2_1_1_embedded_location_errors_are_nested() {
    let raw = V211::session()
        .with_at("/location/evses/0/connectors/0/voltage", json!("230V"))
        .build();
    let result = v2_1_1::Session::validate(&raw, &ctx());
    assert_error_location!(result.clone(), "location.evses[0].connectors[0].voltage");
    assert!(matches!(
        result.unwrap_err().root_cause(),
        ValidationError::TypeMismatch { expected, .. } if expected == "integer"
    ));
}

#[test]
fn test_v2_1_1_ids_keep_case_under_either_context() {
    let raw = V211::session().with("id", json!("Sess-101")).build();
    let lower = v2_1_1::Session::validate(&raw, &ctx()).unwrap();
    let upper = v2_1_1::Session::validate(&raw, &ValidationContext::uppercase()).unwrap();
    assert_eq!(lower.id.as_str(), "Sess-101");
    assert_eq!(lower, upper);
}
