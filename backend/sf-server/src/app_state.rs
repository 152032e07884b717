use crate::Metrics;

use sf_auth::PasswordHasher;
use sf_config::AuthConfig;
use sf_core::AddressStore;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Accounts, sessions and the product catalog
    pub pool: SqlitePool,
    /// User-data service behind the shipping-address endpoint
    pub address_store: Arc<dyn AddressStore>,
    pub auth: AuthConfig,
    pub password_hasher: Arc<PasswordHasher>,
    pub metrics: Metrics,
    /// Set when the Prometheus recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(pool: SqlitePool, address_store: Arc<dyn AddressStore>, auth: AuthConfig) -> Self {
        Self {
            pool,
            address_store,
            auth,
            password_hasher: Arc::new(PasswordHasher::new()),
            metrics: Metrics::new(),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
