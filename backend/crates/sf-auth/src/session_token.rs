use crate::{AuthError, CookieMap, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

pub const DEFAULT_COOKIE_NAME: &str = "token";

const LOG_PREFIX_LENGTH: usize = 8;

/// Opaque session credential carried in the session cookie.
///
/// `Debug` and `Display` only reveal a short prefix so tokens can be
/// logged safely.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// New random token (32 lowercase hex characters)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Extract the token from a raw `Cookie` header.
    ///
    /// Fails with [`AuthError::MissingToken`] when the header is absent,
    /// has no `<cookie_name>=` segment, or the value is empty.
    #[track_caller]
    pub fn from_cookie_header(header: Option<&str>, cookie_name: &str) -> AuthErrorResult<Self> {
        CookieMap::from_header(header)
            .get(cookie_name)
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
            .ok_or_else(|| AuthError::MissingToken {
                cookie_name: cookie_name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// First few characters, for log lines
    pub fn log_prefix(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(LOG_PREFIX_LENGTH)
            .map_or(self.0.len(), |(i, _)| i);
        &self.0[..end]
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({}…)", self.log_prefix())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}…", self.log_prefix())
    }
}
