use super::create_test_state;

use crate::{ApiError, CurrentUser};

use sf_core::{Session, User};
use sf_db::{SessionRepository, UserRepository};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use chrono::Duration;

async fn extract(state: &crate::AppState, cookie: &str) -> Result<CurrentUser, ApiError> {
    let (mut parts, _body) = Request::builder()
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
        .into_parts();

    CurrentUser::from_request_parts(&mut parts, state).await
}

async fn seed_session(state: &crate::AppState, token: &str, ttl: Duration) -> User {
    let user = User::new(
        "Asha".to_string(),
        "asha@example.com".to_string(),
        "9876543210".to_string(),
        "hash".to_string(),
    );
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .unwrap();
    SessionRepository::new(state.pool.clone())
        .create(&Session::new(token.to_string(), user.id, ttl))
        .await
        .unwrap();
    user
}

#[tokio::test]
async fn given_live_session_when_extracting_then_owner_returned() {
    let state = create_test_state().await;
    let user = seed_session(&state, "live-token", Duration::hours(1)).await;

    let current = extract(&state, "token=live-token").await.unwrap();

    assert_eq!(current.user_id, user.id);
    assert_eq!(current.token.as_str(), "live-token");
}

#[tokio::test]
async fn given_expired_session_when_extracting_then_unauthenticated() {
    let state = create_test_state().await;
    seed_session(&state, "old-token", Duration::hours(-1)).await;

    let result = extract(&state, "token=old-token").await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn given_unknown_token_when_extracting_then_unauthenticated() {
    let state = create_test_state().await;

    let result = extract(&state, "token=nobody").await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}
