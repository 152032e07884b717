use crate::session_cookie;

use sf_auth::SessionToken;
use sf_config::AuthConfig;

#[test]
fn given_default_config_when_issuing_then_cookie_carries_token_and_ttl() {
    let config = AuthConfig::default();
    let token = SessionToken::from("abc123".to_string());

    let cookie = session_cookie::issue(&config, &token);

    assert_eq!(
        cookie,
        "token=abc123; HttpOnly; Path=/; SameSite=Lax; Max-Age=604800"
    );
}

#[test]
fn given_secure_config_when_issuing_then_secure_flag_appended() {
    let config = AuthConfig {
        cookie_name: "sid".to_string(),
        session_ttl_hours: 1,
        secure_cookie: true,
    };
    let token = SessionToken::from("abc123".to_string());

    let cookie = session_cookie::issue(&config, &token);

    assert_eq!(
        cookie,
        "sid=abc123; HttpOnly; Path=/; SameSite=Lax; Max-Age=3600; Secure"
    );
}

#[test]
fn given_config_when_clearing_then_max_age_is_zero() {
    let cookie = session_cookie::clear(&AuthConfig::default());

    assert_eq!(cookie, "token=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0");
}
