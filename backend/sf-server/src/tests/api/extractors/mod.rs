mod auth_token;
mod current_user;

use crate::AppState;

use sf_config::AuthConfig;
use sf_db::MemoryAddressStore;

use std::sync::Arc;

async fn create_test_state() -> AppState {
    let pool = sf_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    AppState::new(
        pool,
        Arc::new(MemoryAddressStore::new()),
        AuthConfig::default(),
    )
}
