use super::create_test_state;

use crate::{ApiError, AuthToken};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(cookie: Option<&str>) -> Result<AuthToken, ApiError> {
    let state = create_test_state().await;
    let mut builder = Request::builder();
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    AuthToken::from_request_parts(&mut parts, &state).await
}

#[tokio::test]
async fn given_token_cookie_when_extracting_then_token_returned() {
    let token = extract(Some("theme=dark; token=abc123; lang=en"))
        .await
        .unwrap();

    assert_eq!(token.0.as_str(), "abc123");
}

#[tokio::test]
async fn given_value_with_equals_when_extracting_then_value_kept_whole() {
    let token = extract(Some("token=a=b==")).await.unwrap();

    assert_eq!(token.0.as_str(), "a=b==");
}

#[tokio::test]
async fn given_padded_segments_when_extracting_then_segments_trimmed() {
    let token = extract(Some("  other=1 ;   token=xyz  ")).await.unwrap();

    assert_eq!(token.0.as_str(), "xyz");
}

#[tokio::test]
async fn given_repeated_cookie_when_extracting_then_first_wins() {
    let token = extract(Some("token=first; token=second")).await.unwrap();

    assert_eq!(token.0.as_str(), "first");
}

#[tokio::test]
async fn given_no_cookie_header_when_extracting_then_unauthenticated() {
    let result = extract(None).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn given_empty_token_when_extracting_then_unauthenticated() {
    let result = extract(Some("token=; theme=dark")).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn given_similar_cookie_names_when_extracting_then_unauthenticated() {
    let result = extract(Some("xtoken=abc; tokens=def; token =ghi")).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}
