//! Partial update tests.
//!
//! A partial update accepts any subset of the full record's fields but still
//! validates every field that is present, including nested composites in
//! full.

use serde_json::json;

use crate::common::builders::{RecordBuilder, V211, V221};
use crate::common::ctx;
use crate::{assert_error_location, assert_validation_error, assert_validation_success};

use ocpi_schema::common::Status;
use ocpi_schema::error::ValidationError;
use ocpi_schema::validate::Validate;
use ocpi_schema::{v2_1_1, v2_2_1};

#[test]
fn test_empty_patch() {
    let patch = assert_validation_success!(v2_2_1::LocationPartialUpdate::validate(
        &RecordBuilder::empty().build(),
        &ctx()
    ));
    assert!(patch.is_empty());
    assert_eq!(patch, v2_2_1::LocationPartialUpdate::default());
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({}));
}

#[test]
fn test_patch_must_be_object() {
    assert_validation_error!(
        v2_2_1::EvsePartialUpdate::validate(&json!([]), &ctx()),
        ValidationError::TypeMismatch { .. }
    );
}

#[test]
fn test_present_fields_are_validated() {
    let raw = json!({"status": "BROKEN", "last_updated": "2024-01-15T10:30:00Z"});
    let result = v2_2_1::EvsePartialUpdate::validate(&raw, &ctx());
    assert_validation_error!(result.clone(), ValidationError::InvalidVariant { .. });
    assert_error_location!(result, "status");
}

#[test]
fn test_nested_composites_are_validated_in_full() {
    let raw = json!({"coordinates": {"latitude": "51.047599"}});
    assert_error_location!(
        v2_2_1::LocationPartialUpdate::validate(&raw, &ctx()),
        "coordinates.longitude"
    );

    let raw = json!({"connectors": [{"id": "1"}]});
    assert_error_location!(
        v2_1_1::EvsePartialUpdate::validate(&raw, &ctx()),
        "connectors[0].standard"
    );
}

#[test]
fn test_patch_identifiers_are_case_folded() {
    let raw = json!({"party_id": "BEC", "evses": []});
    let patch = v2_2_1::LocationPartialUpdate::validate(&raw, &ctx()).unwrap();
    assert_eq!(patch.party_id.as_ref().unwrap().as_str(), "bec");
    assert_eq!(patch.evses.as_ref().map(Vec::len), Some(0));
    assert!(patch.country_code.is_none());
}

#[test]
fn test_merged_replaces_only_present_fields() {
    let evse = v2_2_1::Evse::validate(&V221::evse().build(), &ctx()).unwrap();
    let patch = v2_2_1::EvsePartialUpdate::validate(
        &json!({"status": "CHARGING", "last_updated": "2015-06-29T21:00:00Z"}),
        &ctx(),
    )
    .unwrap();

    let merged = evse.merged(&patch);
    assert_eq!(merged.status, Status::Charging);
    assert_eq!(merged.last_updated.as_str(), "2015-06-29T21:00:00Z");
    assert_eq!(merged.uid, evse.uid);
    assert_eq!(merged.connectors, evse.connectors);

    // the original is untouched
    assert_eq!(evse.status, Status::Available);
}

#[test]
fn test_merged_replaces_nested_values_whole() {
    let location = v2_1_1::Location::validate(&V211::location().build(), &ctx()).unwrap();
    let patch = v2_1_1::LocationPartialUpdate::validate(
        &json!({"opening_times": {"twentyfourseven": true}}),
        &ctx(),
    )
    .unwrap();

    let merged = location.merged(&patch);
    let hours = merged.opening_times.as_ref().unwrap();
    assert!(hours.twentyfourseven);
    assert!(hours.regular_hours.is_empty());
}

#[test]
fn test_merging_empty_patch_is_identity() {
    let tariff = v2_2_1::Tariff::validate(&V221::tariff().build(), &ctx()).unwrap();
    assert_eq!(tariff.merged(&v2_2_1::TariffPartialUpdate::default()), tariff);
}

#[test]
fn test_full_record_converts_to_patch() {
    let token = v2_2_1::Token::validate(&V221::token().build(), &ctx()).unwrap();
    let patch = v2_2_1::TokenPartialUpdate::from(token.clone());
    assert!(!patch.is_empty());

    let other = v2_2_1::Token::validate(
        &V221::token()
            .with("uid", json!("999"))
            .with("valid", json!(false))
            .build(),
        &ctx(),
    )
    .unwrap();
    assert_eq!(other.merged(&patch), token);
}

#[test]
fn test_full_record_is_valid_patch() {
    let raw = V221::session().build();
    let full = v2_2_1::Session::validate(&raw, &ctx()).unwrap();
    let patch = v2_2_1::SessionPartialUpdate::validate(&raw, &ctx()).unwrap();
    assert_eq!(patch, v2_2_1::SessionPartialUpdate::from(full.clone()));
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        serde_json::to_value(&full).unwrap()
    );
}

#[test]
fn test_patch_serialization_omits_absent_fields() {
    let patch = v2_1_1::ConnectorPartialUpdate::validate(
        &json!({"tariff_id": "12", "voltage": null}),
        &ctx(),
    )
    .unwrap();
    assert!(patch.voltage.is_none());
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"tariff_id": "12"}));
}

#[test]
fn test_patch_type_key() {
    let patch =
        v2_1_1::TokenPartialUpdate::validate(&json!({"type": "OTHER"}), &ctx()).unwrap();
    assert_eq!(patch.kind, Some(v2_1_1::enums::TokenType::Other));
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"type": "OTHER"}));
}
