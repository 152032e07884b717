use crate::AppState;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use metrics::counter;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Counters for the storefront HTTP API
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "sf_server",
        }
    }

    pub fn shipping_address_read(&self) {
        counter!(format!("{}.shipping_address.reads", self.prefix)).increment(1);
    }

    pub fn shipping_address_written(&self) {
        counter!(format!("{}.shipping_address.writes", self.prefix)).increment(1);
    }

    /// Record a submitted address that failed validation
    pub fn shipping_address_rejected(&self, field: Option<&str>) {
        counter!(format!("{}.shipping_address.validation_failures", self.prefix)).increment(1);
        if let Some(field) = field {
            counter!(format!(
                "{}.shipping_address.validation_failures.{}",
                self.prefix, field
            ))
            .increment(1);
        }
    }

    /// Record an address store failure
    pub fn shipping_address_error(&self) {
        counter!(format!("{}.shipping_address.errors", self.prefix)).increment(1);
    }

    pub fn signup(&self) {
        counter!(format!("{}.auth.signups", self.prefix)).increment(1);
    }

    pub fn signin(&self) {
        counter!(format!("{}.auth.signins", self.prefix)).increment(1);
    }

    pub fn signin_failed(&self) {
        counter!(format!("{}.auth.signin_failures", self.prefix)).increment(1);
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(ref handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics exporter not enabled").into_response(),
    }
}
