use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_SESSION_TTL_HOURS,
    MAX_SESSION_TTL_HOURS, MIN_SESSION_TTL_HOURS,
};

use serde::Deserialize;

/// Session cookie settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Cookie carrying the session token
    pub cookie_name: String,
    pub session_ttl_hours: u64,
    /// Add `Secure` to issued cookies (enable behind HTTPS)
    pub secure_cookie: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            secure_cookie: false,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::auth("auth.cookie_name cannot be empty"));
        }

        if self
            .cookie_name
            .chars()
            .any(|c| c == '=' || c == ';' || c == ',' || c.is_whitespace() || c.is_control())
        {
            return Err(ConfigError::auth(format!(
                "auth.cookie_name contains invalid characters: {:?}",
                self.cookie_name
            )));
        }

        if !(MIN_SESSION_TTL_HOURS..=MAX_SESSION_TTL_HOURS).contains(&self.session_ttl_hours) {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_hours must be {}-{}, got {}",
                MIN_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS, self.session_ttl_hours
            )));
        }

        Ok(())
    }

    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl_hours * 3600
    }
}
