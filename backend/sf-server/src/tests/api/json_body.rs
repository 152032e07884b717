use crate::{ApiError, SignInRequest, parse_json};

use bytes::Bytes;
use googletest::prelude::*;

#[test]
fn given_valid_json_when_parsed_then_fields_populated() {
    let body = Bytes::from_static(br#"{"email":"asha@example.com"}"#);

    let request: SignInRequest = parse_json(&body).unwrap();

    assert_that!(request.email, some(eq("asha@example.com")));
    assert_that!(request.password, none());
}

#[test]
fn given_invalid_json_when_parsed_then_malformed_body() {
    let body = Bytes::from_static(b"{not json");

    let result: Result<SignInRequest, ApiError> = parse_json(&body);

    assert!(matches!(result, Err(ApiError::MalformedBody { .. })));
}

#[test]
fn given_non_string_field_when_parsed_then_malformed_body() {
    let body = Bytes::from_static(br#"{"email":42}"#);

    let result: Result<SignInRequest, ApiError> = parse_json(&body);

    assert!(matches!(result, Err(ApiError::MalformedBody { .. })));
}
