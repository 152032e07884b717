use crate::{Address, AddressInput, CoreError, is_valid_pincode};

use googletest::prelude::*;
use serde_json::json;

fn valid_input() -> AddressInput {
    AddressInput {
        pincode: Some("110001".into()),
        address: Some("12 MG Road".into()),
        city: Some("Delhi".into()),
        state: Some("Delhi".into()),
    }
}

fn validation_message(input: AddressInput) -> String {
    match input.validate() {
        Err(CoreError::Validation { message, .. }) => message,
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn given_complete_address_when_validated_then_returns_same_fields() {
    let address = valid_input().validate().unwrap();

    assert_that!(
        address,
        eq(&Address {
            pincode: "110001".into(),
            address: "12 MG Road".into(),
            city: "Delhi".into(),
            state: "Delhi".into(),
        })
    );
}

#[test]
fn given_empty_input_when_validated_then_pincode_is_reported_first() {
    assert_that!(
        validation_message(AddressInput::default()),
        eq("pincode is required")
    );
}

#[test]
fn given_each_missing_field_when_validated_then_names_that_field() {
    let mut input = valid_input();
    input.address = Some("".into());
    assert_that!(validation_message(input), eq("address is required"));

    let mut input = valid_input();
    input.city = None;
    assert_that!(validation_message(input), eq("city is required"));

    let mut input = valid_input();
    input.state = Some("".into());
    assert_that!(validation_message(input), eq("state is required"));
}

#[test]
fn given_missing_city_and_bad_pincode_when_validated_then_required_check_wins() {
    let mut input = valid_input();
    input.pincode = Some("12".into());
    input.city = None;

    assert_that!(validation_message(input), eq("city is required"));
}

#[test]
fn given_malformed_pincodes_when_validated_then_invalid_format() {
    for pincode in ["1234", "abcdef", "1234567", "12AB56", " 11000", "110001\n"] {
        let mut input = valid_input();
        input.pincode = Some(pincode.into());
        assert_that!(validation_message(input), eq("Invalid pincode format"));
    }
}

#[test]
fn given_validation_failure_then_field_is_recorded() {
    let mut input = valid_input();
    input.pincode = Some("abc".into());

    let err = input.validate().unwrap_err();

    assert_eq!(err.field(), Some("pincode"));
}

#[test]
fn given_non_ascii_digits_when_checking_pincode_then_rejected() {
    assert!(is_valid_pincode("560034"));
    assert!(!is_valid_pincode("١٢٣٤٥٦"));
    assert!(!is_valid_pincode(""));
}

#[test]
fn given_json_with_missing_keys_when_deserialized_then_fields_are_none() {
    let input: AddressInput = serde_json::from_str(r#"{"pincode":"110001"}"#).unwrap();

    assert_eq!(input.pincode, Some(json!("110001")));
    assert_that!(input.address, none());
    assert_that!(validation_message(input), eq("address is required"));
}

#[test]
fn given_json_with_null_field_when_deserialized_then_treated_as_missing() {
    let input: AddressInput = serde_json::from_str(
        r#"{"pincode":"110001","address":null,"city":"Y","state":"Z"}"#,
    )
    .unwrap();

    assert_that!(validation_message(input), eq("address is required"));
}

#[test]
fn given_falsy_json_values_when_validated_then_reported_as_required() {
    let cases = [
        (r#"{"pincode":0,"address":"A","city":"B","state":"C"}"#, "pincode is required"),
        (r#"{"pincode":"110001","address":0,"city":"B","state":"C"}"#, "address is required"),
        (r#"{"pincode":"110001","address":"A","city":false,"state":"C"}"#, "city is required"),
        (r#"{"pincode":"110001","address":"A","city":"B","state":0.0}"#, "state is required"),
    ];

    for (body, expected) in cases {
        let input: AddressInput = serde_json::from_str(body).unwrap();
        assert_that!(validation_message(input), eq(expected));
    }
}

#[test]
fn given_falsy_later_field_and_non_string_earlier_field_then_required_check_wins() {
    let input: AddressInput =
        serde_json::from_str(r#"{"pincode":110001,"address":"A","city":"","state":"C"}"#)
            .unwrap();

    assert_that!(validation_message(input), eq("city is required"));
}

#[test]
fn given_truthy_non_string_values_when_validated_then_must_be_a_string() {
    let input: AddressInput =
        serde_json::from_str(r#"{"pincode":"110001","address":"A","city":true,"state":["C"]}"#)
            .unwrap();

    assert_that!(validation_message(input), eq("city must be a string"));
}
