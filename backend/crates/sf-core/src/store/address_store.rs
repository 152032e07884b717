use crate::{Address, StoreResult};

use async_trait::async_trait;

/// User-data service holding one shipping address per session owner.
///
/// Implementations resolve `token` to an identity themselves; an
/// unresolvable token is reported as [`StoreError::InvalidSession`].
///
/// [`StoreError::InvalidSession`]: crate::StoreError::InvalidSession
#[async_trait]
pub trait AddressStore: Send + Sync {
    /// Stored address for the token's owner, or `None` if never set.
    async fn get_shipping_address(&self, token: &str) -> StoreResult<Option<Address>>;

    /// Create or overwrite the owner's address and return what was stored.
    async fn set_shipping_address(&self, token: &str, address: &Address) -> StoreResult<Address>;
}
