use crate::ProductSummaryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductSummaryDto>,
}
