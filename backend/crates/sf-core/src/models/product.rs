//! Catalog product.

use crate::Review;

use serde::{Deserialize, Serialize};

/// Shown when a product has no thumbnails
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog id, e.g. "PROD001"
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnails: Vec<String>,
    pub colors: Vec<String>,
    /// Price in whole rupees
    pub price: i64,
    pub stock: i64,
    pub reviews: Vec<Review>,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn stock_label(&self) -> &'static str {
        if self.is_in_stock() {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }

    pub fn primary_thumbnail(&self) -> &str {
        self.thumbnails
            .first()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(PLACEHOLDER_THUMBNAIL)
    }

    /// Catalog id for the n-th product ("PROD001", "PROD002", ...)
    pub fn catalog_id(sequence: u32) -> String {
        format!("PROD{:03}", sequence)
    }
}
