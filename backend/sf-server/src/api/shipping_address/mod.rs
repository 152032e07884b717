#[allow(clippy::module_inception)]
pub mod shipping_address;
