pub mod auth;
pub mod error;
pub mod extractors;
pub mod json_body;
pub mod products;
pub mod shipping_address;
