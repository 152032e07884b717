use sf_core::Product;

use serde::Serialize;

/// Single product response, reviews included
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}
