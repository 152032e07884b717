//! Argon2id password hashing for account credentials.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use error_location::ErrorLocation;

#[derive(Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `password` with a fresh random salt into a PHC string.
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Check `password` against a stored PHC string.
    ///
    /// A mismatch is [`AuthError::InvalidCredentials`]; an unparseable
    /// stored hash is [`AuthError::PasswordHash`].
    #[track_caller]
    pub fn verify(&self, password: &str, stored_hash: &str) -> AuthErrorResult<()> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
