use crate::models::is_missing;
use crate::{CoreError, Result as CoreErrorResult};

use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// Signup form submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Signup fields after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl NewUser {
    #[track_caller]
    pub fn validate(self) -> CoreErrorResult<ValidatedNewUser> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("password", &self.password),
        ];
        for (field, value) in fields {
            if is_missing(value) {
                return Err(CoreError::required(field));
            }
        }

        let name = self.name.unwrap_or_default().trim().to_string();
        let email = self.email.unwrap_or_default().trim().to_lowercase();
        let phone = self.phone.unwrap_or_default().trim().to_string();
        let password = self.password.unwrap_or_default();

        if !is_valid_email(&email) {
            return Err(CoreError::validation("email", "Invalid email format"));
        }

        if !is_valid_phone(&phone) {
            return Err(CoreError::validation("phone", "Invalid phone number"));
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(
                "password",
                format!(
                    "Password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
            ));
        }

        Ok(ValidatedNewUser {
            name,
            email,
            phone,
            password,
        })
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
}
