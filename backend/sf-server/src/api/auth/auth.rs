//! Account REST API handlers: signup, sign-in and sign-out.

use crate::{
    ApiError, ApiResult, AppState, AuthToken, SignInRequest, UserResponse, parse_json,
    session_cookie,
};

use sf_auth::{PasswordHasher, SessionToken};
use sf_core::{CoreError, NewUser, Session, User};
use sf_db::{DbError, SessionRepository, UserRepository};

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use log::{debug, info, warn};

/// Run a password hasher operation off the async runtime
async fn with_hasher<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    F: FnOnce(&PasswordHasher) -> sf_auth::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let hasher = state.password_hasher.clone();
    let result = tokio::task::spawn_blocking(move || op(hasher.as_ref()))
        .await
        .map_err(|e| ApiError::internal(format!("Password task failed: {}", e)))?;
    Ok(result?)
}

/// POST /api/auth/signup
///
/// Create an account from `{name, email, phone, password}`.
pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let new_user: NewUser = parse_json(&body)?;
    let validated = new_user.validate()?;

    let repo = UserRepository::new(state.pool.clone());
    if repo.find_by_email(&validated.email).await?.is_some() {
        return Err(ApiError::conflict("Email already registered"));
    }

    let password = validated.password;
    let password_hash = with_hasher(&state, move |hasher| hasher.hash(&password)).await?;

    let user = User::new(
        validated.name,
        validated.email,
        validated.phone,
        password_hash,
    );

    // Lost a race with a concurrent signup for the same email
    repo.create(&user).await.map_err(|e| match e {
        DbError::Conflict { .. } => ApiError::conflict("Email already registered"),
        other => ApiError::from(other),
    })?;

    state.metrics.signup();
    info!("Registered user {}", user.id);

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// POST /api/auth/signin
///
/// Verify `{email, password}` and open a session carried in the cookie.
pub async fn signin(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let request: SignInRequest = parse_json(&body)?;

    let email = request
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| CoreError::required("email"))?;
    let password = request
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| CoreError::required("password"))?;

    let user = match UserRepository::new(state.pool.clone())
        .find_by_email(&email)
        .await?
    {
        Some(user) => user,
        None => {
            state.metrics.signin_failed();
            debug!("Sign-in for unknown email");
            return Err(ApiError::invalid_credentials());
        }
    };

    let stored_hash = user.password_hash.clone();
    with_hasher(&state, move |hasher| hasher.verify(&password, &stored_hash))
        .await
        .inspect_err(|e| {
            if matches!(e, ApiError::Unauthenticated { .. }) {
                state.metrics.signin_failed();
                warn!("Wrong password for user {}", user.id);
            }
        })?;

    let token = SessionToken::generate();
    let ttl = chrono::Duration::seconds(state.auth.session_ttl_secs() as i64);
    let session = Session::new(token.as_str().to_string(), user.id, ttl);
    SessionRepository::new(state.pool.clone())
        .create(&session)
        .await?;

    state.metrics.signin();
    info!("User {} signed in (session {})", user.id, token);

    let cookie = session_cookie::issue(&state.auth, &token);
    Ok(([(header::SET_COOKIE, cookie)], Json(UserResponse { user })).into_response())
}

/// POST /api/auth/signout
///
/// Ends the session and clears the cookie; succeeds even when the
/// session is already gone.
pub async fn signout(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
) -> ApiResult<Response> {
    let removed = SessionRepository::new(state.pool.clone())
        .delete(token.as_str())
        .await?;

    if removed {
        info!("Session {} signed out", token);
    } else {
        debug!("Sign-out for unknown session {}", token);
    }

    let cookie = session_cookie::clear(&state.auth);
    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]).into_response())
}

