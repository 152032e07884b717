#![allow(dead_code)]

//! Test infrastructure for sf-server API tests

use sf_config::AuthConfig;
use sf_core::{Address, AddressStore, StoreError, StoreResult};
use sf_db::{MemoryAddressStore, SqliteAddressStore};
use sf_server::{AppState, build_router};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// AppState over an in-memory database with the SQLite address store
pub async fn create_test_app_state() -> AppState {
    let pool = sf_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let store = Arc::new(SqliteAddressStore::new(pool.clone()));

    AppState::new(pool, store, AuthConfig::default())
}

/// AppState whose address store is `store`
pub async fn create_test_app_state_with_store(store: Arc<dyn AddressStore>) -> AppState {
    let pool = sf_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, store, AuthConfig::default())
}

pub async fn create_memory_app_state() -> AppState {
    create_test_app_state_with_store(Arc::new(MemoryAddressStore::new())).await
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Null` when the body is empty or not JSON
    pub json: serde_json::Value,
    pub text: String,
}

/// Run one request through a fresh router
pub async fn send(state: &AppState, request: Request<Body>) -> TestResponse {
    let response = build_router(state.clone())
        .oneshot(request)
        .await
        .expect("Router failed");

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&body).to_string();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    TestResponse {
        status,
        headers,
        json,
        text,
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, cookie: Option<&str>, body: impl Into<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.into())).unwrap()
}

pub const SHIPPING_ADDRESS_URI: &str = "/api/protected/user/shipping-address";

pub fn delhi_address_json() -> serde_json::Value {
    serde_json::json!({
        "pincode": "110001",
        "address": "12 MG Road",
        "city": "Delhi",
        "state": "Delhi",
    })
}

/// Register an account and sign in; returns the `token=<value>` pair
pub async fn signup_and_signin(state: &AppState, email: &str) -> String {
    let signup = serde_json::json!({
        "name": "Asha Verma",
        "email": email,
        "phone": "9876543210",
        "password": "correct-horse",
    });
    let response = send(state, post_json("/api/auth/signup", None, signup.to_string())).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);

    let signin = serde_json::json!({ "email": email, "password": "correct-horse" });
    let response = send(state, post_json("/api/auth/signin", None, signin.to_string())).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text);

    session_cookie_pair(&response.headers).expect("Sign-in did not set a cookie")
}

/// `name=value` part of the response's `Set-Cookie` header
pub fn session_cookie_pair(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Address store that fails every call with a fixed error and counts calls
pub struct FailingAddressStore {
    kind: FailureKind,
    pub calls: AtomicUsize,
}

#[derive(Clone, Copy)]
pub enum FailureKind {
    InvalidSession,
    Rejected,
    Internal,
}

impl FailingAddressStore {
    pub fn new(kind: FailureKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(match self.kind {
            FailureKind::InvalidSession => StoreError::invalid_session(),
            FailureKind::Rejected => StoreError::rejected("Address outside delivery area"),
            FailureKind::Internal => StoreError::internal("connection reset"),
        })
    }
}

#[async_trait]
impl AddressStore for FailingAddressStore {
    async fn get_shipping_address(&self, _token: &str) -> StoreResult<Option<Address>> {
        self.fail()
    }

    async fn set_shipping_address(&self, _token: &str, _address: &Address) -> StoreResult<Address> {
        self.fail()
    }
}
