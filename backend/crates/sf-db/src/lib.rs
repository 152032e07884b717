pub mod error;
pub mod pool;
pub mod repositories;
pub mod stores;

pub use error::{DbError, Result};
pub use pool::{MIGRATOR, connect, connect_in_memory};
pub use repositories::product_repository::ProductRepository;
pub use repositories::session_repository::SessionRepository;
pub use repositories::shipping_address_repository::ShippingAddressRepository;
pub use repositories::user_repository::UserRepository;
pub use stores::memory_address_store::MemoryAddressStore;
pub use stores::sqlite_address_store::SqliteAddressStore;
