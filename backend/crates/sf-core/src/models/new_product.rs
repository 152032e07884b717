//! Product submitted from the admin dashboard's add-product form.

use crate::models::is_missing;
use crate::{CoreError, Product, Result as CoreErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Vec<String>,
    pub colors: Vec<String>,
    pub price: Option<i64>,
    pub stock: Option<i64>,
}

impl NewProduct {
    /// Validate and build a [`Product`].
    ///
    /// The catalog id is left empty; storage assigns it on insert.
    #[track_caller]
    pub fn validate(self) -> CoreErrorResult<Product> {
        if is_missing(&self.name) {
            return Err(CoreError::required("name"));
        }
        if is_missing(&self.description) {
            return Err(CoreError::required("description"));
        }

        let price = self.price.ok_or_else(|| CoreError::required("price"))?;
        if price <= 0 {
            return Err(CoreError::validation("price", "price must be greater than 0"));
        }

        let stock = self.stock.ok_or_else(|| CoreError::required("stock"))?;
        if stock < 0 {
            return Err(CoreError::validation("stock", "stock cannot be negative"));
        }

        Ok(Product {
            id: String::new(),
            name: self.name.unwrap_or_default().trim().to_string(),
            description: self.description.unwrap_or_default().trim().to_string(),
            thumbnails: self
                .thumbnails
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .collect(),
            colors: self
                .colors
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
            price,
            stock,
            reviews: Vec::new(),
        })
    }
}
