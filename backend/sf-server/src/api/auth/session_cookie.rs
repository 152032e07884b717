//! `Set-Cookie` values for the session cookie.

use sf_auth::SessionToken;
use sf_config::AuthConfig;

fn build(config: &AuthConfig, value: &str, max_age_secs: u64) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        config.cookie_name, value, max_age_secs
    );
    if config.secure_cookie {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Cookie issuing `token` for the configured session lifetime
pub fn issue(config: &AuthConfig, token: &SessionToken) -> String {
    build(config, token.as_str(), config.session_ttl_secs())
}

/// Cookie telling the browser to drop the session
pub fn clear(config: &AuthConfig) -> String {
    build(config, "", 0)
}
