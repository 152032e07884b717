pub mod memory_address_store;
pub mod sqlite_address_store;
