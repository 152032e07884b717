//! Session cookie extractor

use crate::{ApiError, AppState};

use sf_auth::SessionToken;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Session token taken from the configured cookie.
///
/// Rejects with 401 before the handler runs (and before any body is
/// read) when the cookie is absent or empty.
#[derive(Debug, Clone)]
pub struct AuthToken(pub SessionToken);

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let cookie_header = parts
                .headers
                .get(header::COOKIE)
                .and_then(|value| value.to_str().ok());

            let token = SessionToken::from_cookie_header(cookie_header, &state.auth.cookie_name)?;
            log::debug!("Session cookie present: {}", token);

            Ok(AuthToken(token))
        }
    }
}
