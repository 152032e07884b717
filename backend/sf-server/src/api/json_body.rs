use crate::{ApiError, ApiResult};

use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Decode a JSON request body.
///
/// Handlers take the raw body so authentication runs first and decode
/// failures render as our own 400 instead of axum's rejection.
#[track_caller]
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::malformed_body(e.to_string()))
}
