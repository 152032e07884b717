pub mod list_products_query;
pub mod product_list_response;
pub mod product_response;
pub mod product_summary_dto;
#[allow(clippy::module_inception)]
pub mod products;
