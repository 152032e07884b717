//! Process-local [`AddressStore`] where the token itself is the identity.

use sf_core::{Address, AddressStore, StoreResult};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Development backend: entries are never evicted, so the map holds one
/// address per token ever stored until the process exits.
#[derive(Clone, Default)]
pub struct MemoryAddressStore {
    addresses: Arc<RwLock<HashMap<String, Address>>>,
}

impl MemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.addresses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.addresses.read().await.is_empty()
    }
}

#[async_trait]
impl AddressStore for MemoryAddressStore {
    async fn get_shipping_address(&self, token: &str) -> StoreResult<Option<Address>> {
        Ok(self.addresses.read().await.get(token).cloned())
    }

    async fn set_shipping_address(&self, token: &str, address: &Address) -> StoreResult<Address> {
        self.addresses
            .write()
            .await
            .insert(token.to_string(), address.clone());
        Ok(address.clone())
    }
}
