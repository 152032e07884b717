//! Shipping-address REST API handlers
//!
//! Both handlers identify the caller by the session cookie and delegate
//! to the configured [`AddressStore`](sf_core::AddressStore).

use crate::{ApiError, ApiResult, AppState, AuthToken, parse_json};

use sf_core::{Address, AddressInput, StoreError};

use axum::{Json, extract::State};
use bytes::Bytes;
use log::{debug, info};

/// Count store failures that end up as 5xx
fn store_failure(state: &AppState, e: StoreError) -> ApiError {
    if matches!(e, StoreError::Internal { .. }) {
        state.metrics.shipping_address_error();
    }
    ApiError::from(e)
}

/// GET /api/protected/user/shipping-address
pub async fn get_shipping_address(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
) -> ApiResult<Json<Address>> {
    debug!("Fetching shipping address for session {}", token);
    state.metrics.shipping_address_read();

    let address = state
        .address_store
        .get_shipping_address(token.as_str())
        .await
        .map_err(|e| store_failure(&state, e))?
        .ok_or_else(|| ApiError::not_found("No shipping address found"))?;

    Ok(Json(address))
}

/// POST /api/protected/user/shipping-address
///
/// Validates `{pincode, address, city, state}` and upserts it.
pub async fn set_shipping_address(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    body: Bytes,
) -> ApiResult<Json<Address>> {
    debug!("Storing shipping address for session {}", token);

    let input: AddressInput = parse_json(&body)?;
    let address = input.validate().map_err(|e| {
        state.metrics.shipping_address_rejected(e.field());
        ApiError::from(e)
    })?;

    let stored = state
        .address_store
        .set_shipping_address(token.as_str(), &address)
        .await
        .map_err(|e| store_failure(&state, e))?;

    state.metrics.shipping_address_written();
    info!(
        "Shipping address stored for session {} ({}, {})",
        token, stored.city, stored.state
    );

    Ok(Json(stored))
}
