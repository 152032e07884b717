use crate::{ApiError, AppState, AuthToken};

use sf_auth::SessionToken;
use sf_db::SessionRepository;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::Utc;
use uuid::Uuid;

/// Owner of a live session; 401 when the token is absent, unknown or
/// expired.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub token: SessionToken,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let AuthToken(token) = AuthToken::from_request_parts(parts, state).await?;

            let user_id = SessionRepository::new(state.pool.clone())
                .find_live_user_id(token.as_str(), Utc::now())
                .await?
                .ok_or_else(|| {
                    log::debug!("No live session for {}", token);
                    ApiError::unauthenticated()
                })?;

            Ok(CurrentUser { user_id, token })
        }
    }
}
