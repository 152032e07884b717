use crate::{CoreError, NewUser};

use googletest::prelude::*;

fn valid_signup() -> NewUser {
    NewUser {
        name: Some("Priya Sharma".into()),
        email: Some("Priya@Example.com".into()),
        phone: Some("9876543210".into()),
        password: Some("correct horse".into()),
    }
}

fn message(user: NewUser) -> String {
    match user.validate() {
        Err(CoreError::Validation { message, .. }) => message,
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn given_valid_signup_when_validated_then_email_is_lowercased() {
    let validated = valid_signup().validate().unwrap();

    assert_that!(validated.email, eq("priya@example.com"));
    assert_that!(validated.name, eq("Priya Sharma"));
}

#[test]
fn given_missing_fields_when_validated_then_first_missing_is_reported() {
    assert_that!(message(NewUser::default()), eq("name is required"));

    let mut user = valid_signup();
    user.phone = Some(String::new());
    user.password = None;
    assert_that!(message(user), eq("phone is required"));
}

#[test]
fn given_bad_email_when_validated_then_invalid_email_format() {
    for email in ["no-at-sign", "@example.com", "a@b", "a@@b.com", "a b@c.com"] {
        let mut user = valid_signup();
        user.email = Some(email.into());
        assert_that!(message(user), eq("Invalid email format"));
    }
}

#[test]
fn given_bad_phone_when_validated_then_invalid_phone_number() {
    for phone in ["12345", "98765abcde", "+1234567890123456"] {
        let mut user = valid_signup();
        user.phone = Some(phone.into());
        assert_that!(message(user), eq("Invalid phone number"));
    }
}

#[test]
fn given_international_phone_when_validated_then_accepted() {
    let mut user = valid_signup();
    user.phone = Some("+919876543210".into());

    assert_that!(user.validate(), ok(anything()));
}

#[test]
fn given_short_password_when_validated_then_rejected() {
    let mut user = valid_signup();
    user.password = Some("short".into());

    assert_that!(message(user), eq("Password must be at least 8 characters"));
}
