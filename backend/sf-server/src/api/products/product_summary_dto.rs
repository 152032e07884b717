use sf_core::Product;

use serde::Serialize;

/// Catalog listing entry
#[derive(Debug, Serialize)]
pub struct ProductSummaryDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
    pub colors: Vec<String>,
    pub thumbnails: Vec<String>,
    /// First thumbnail, or the placeholder image
    pub thumbnail: String,
    pub in_stock: bool,
    pub stock_label: String,
    pub selected: bool,
}

impl ProductSummaryDto {
    pub fn from_product(product: Product, selected_id: Option<&str>) -> Self {
        Self {
            thumbnail: product.primary_thumbnail().to_string(),
            in_stock: product.is_in_stock(),
            stock_label: product.stock_label().to_string(),
            selected: selected_id == Some(product.id.as_str()),
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            colors: product.colors,
            thumbnails: product.thumbnails,
        }
    }
}
