//! Token and authorization validation tests.

use serde_json::json;

use crate::common::builders::{V211, V221};
use crate::common::ctx;
use crate::{assert_error_location, assert_validation_error, assert_validation_success};

use ocpi_schema::config::ValidationContext;
use ocpi_schema::error::ValidationError;
use ocpi_schema::validate::Validate;
use ocpi_schema::{v2_1_1, v2_2_1};

#[test]
fn test_v2_1_1_token() {
    let token = assert_validation_success!(v2_1_1::Token::validate(&V211::token().build(), &ctx()));

    assert_eq!(token.uid.as_str(), "012345678");
    assert_eq!(token.auth_id.as_str(), "DE8ACC12E46L89");
    assert_eq!(token.kind, v2_1_1::enums::TokenType::Rfid);
    assert_eq!(token.whitelist, v2_1_1::enums::WhitelistType::Allowed);
    assert!(token.valid);
    assert!(token.language.is_none());
}

#[test]
fn test_v2_2_1_token() {
    let token = assert_validation_success!(v2_2_1::Token::validate(&V221::token().build(), &ctx()));

    assert_eq!(token.party_id.as_str(), "tnm");
    assert_eq!(token.group_id.as_ref().unwrap().as_str(), "df000-2001-8999");
    assert_eq!(token.visual_number.as_ref().unwrap().as_str(), "DF000-2001-8999-1");
    assert_eq!(token.default_profile_type, Some(v2_2_1::enums::ProfileType::Green));
    assert_eq!(
        token.energy_contract.as_ref().unwrap().contract_id.as_ref().unwrap().as_str(),
        "0123456789"
    );
}

#[test]
fn test_v2_2_1_token_type_values() {
    for value in ["AD_HOC_USER", "APP_USER", "OTHER", "RFID"] {
        let raw = V221::token().with("type", json!(value)).build();
        assert_validation_success!(v2_2_1::Token::validate(&raw, &ctx()));
    }

    let raw = V211::token().with("type", json!("APP_USER")).build();
    assert_validation_error!(
        v2_1_1::Token::validate(&raw, &ctx()),
        ValidationError::InvalidVariant { .. }
    );
}

#[test]
fn test_valid_flag_must_be_boolean() {
    let raw = V221::token().with("valid", json!("true")).build();
    let result = v2_2_1::Token::validate(&raw, &ctx());
    assert_validation_error!(result.clone(), ValidationError::TypeMismatch { .. });
    assert_error_location!(result, "valid");
}

#[test]
fn test_energy_contract_supplier_required() {
    let raw = V221::token()
        .without_at("/energy_contract/supplier_name")
        .build();
    let result = v2_2_1::Token::validate(&raw, &ctx());
    assert_validation_error!(result.clone(), ValidationError::NestedValidationFailure { .. });
    assert_error_location!(result, "energy_contract.supplier_name");
}

#[test]
fn test_uppercase_context_folds_contract_id() {
    let token = v2_2_1::Token::validate(&V221::token().build(), &ValidationContext::uppercase())
        .unwrap();
    assert_eq!(token.contract_id.as_str(), "DE8ACC12E46L89");
    assert_eq!(token.issuer.as_str(), "TheNewMotion");
}

#[test]
fn test_authorization_info_v2_2_1() {
    let raw = json!({
        "allowed": "NO_CREDIT",
        "token": V221::token().build(),
        "info": {"language": "en", "text": "Insufficient credit"}
    });
    let info = v2_2_1::AuthorizationInfo::validate(&raw, &ctx()).unwrap();
    assert_eq!(info.allowed, v2_2_1::enums::AllowedType::NoCredit);
    assert_eq!(info.token.uid.as_str(), "012345678");
    assert!(info.location.is_none());

    let raw = json!({"allowed": "ALLOWED"});
    match v2_2_1::AuthorizationInfo::validate(&raw, &ctx()) {
        Err(ValidationError::MissingRequiredField { field, .. }) => assert_eq!(field, "token"),
        other => panic!("Expected MissingRequiredField, got {:?}", other),
    }
}

#[test]
fn test_authorization_info_v2_1_1() {
    let raw = json!({
        "allowed": "BLOCKED",
        "location": {"location_id": "LOC1", "connector_ids": ["1", 2]}
    });
    assert_error_location!(
        v2_1_1::AuthorizationInfo::validate(&raw, &ctx()),
        "location.connector_ids[1]"
    );
}
