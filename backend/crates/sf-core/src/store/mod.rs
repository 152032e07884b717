pub mod address_store;
pub mod store_error;
