//! [`AddressStore`] backed by the accounts database.

use crate::{DbError, SessionRepository, ShippingAddressRepository};

use sf_core::{Address, AddressStore, StoreError, StoreResult};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Resolves the token through `sessions`, then reads or upserts the
/// owner's row in `shipping_addresses`.
#[derive(Clone)]
pub struct SqliteAddressStore {
    pool: SqlitePool,
}

impl SqliteAddressStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn resolve_user(&self, token: &str) -> StoreResult<Uuid> {
        SessionRepository::new(self.pool.clone())
            .find_live_user_id(token, Utc::now())
            .await
            .map_err(internal)?
            .ok_or_else(|| {
                debug!("No live session for presented token");
                StoreError::invalid_session()
            })
    }
}

/// Database details stay in the log, never in the store error.
#[track_caller]
fn internal(e: DbError) -> StoreError {
    error!("Address store database error: {}", e);
    StoreError::internal("Database operation failed")
}

#[async_trait]
impl AddressStore for SqliteAddressStore {
    async fn get_shipping_address(&self, token: &str) -> StoreResult<Option<Address>> {
        let user_id = self.resolve_user(token).await?;

        ShippingAddressRepository::new(self.pool.clone())
            .find_by_user_id(user_id)
            .await
            .map_err(internal)
    }

    async fn set_shipping_address(&self, token: &str, address: &Address) -> StoreResult<Address> {
        let user_id = self.resolve_user(token).await?;

        ShippingAddressRepository::new(self.pool.clone())
            .upsert(user_id, address)
            .await
            .map_err(|e| match e {
                // The user vanished between session lookup and write
                DbError::Sqlx {
                    source: sqlx::Error::Database(ref db_error),
                    ..
                } if db_error.is_foreign_key_violation() => {
                    StoreError::rejected("Account no longer exists")
                }
                other => internal(other),
            })
    }
}
