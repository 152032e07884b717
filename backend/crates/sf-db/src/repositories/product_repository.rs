//! Product catalog storage.
//!
//! `thumbnails` and `colors` are stored as JSON string arrays. New products
//! get the next "PRODnnn" id inside the insert transaction.

use crate::repositories::parse_timestamp;
use crate::{DbError, Result as DbErrorResult};

use sf_core::{Product, Review};

use std::collections::HashMap;
use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: String,
    thumbnails: String,
    colors: String,
    price: i64,
    stock: i64,
}

#[derive(FromRow)]
struct ReviewRow {
    id: String,
    product_id: String,
    rating: i64,
    comment: String,
    customer_name: String,
    created_at: i64,
}

#[track_caller]
fn decode_list(json: &str, column: &str) -> DbErrorResult<Vec<String>> {
    serde_json::from_str(json).map_err(|e| DbError::Initialization {
        message: format!("Invalid JSON in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn encode_list(values: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(values).map_err(|e| DbError::Initialization {
        message: format!("Cannot encode list: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

impl ProductRow {
    fn into_product(self, reviews: Vec<Review>) -> DbErrorResult<Product> {
        Ok(Product {
            thumbnails: decode_list(&self.thumbnails, "products.thumbnails")?,
            colors: decode_list(&self.colors, "products.colors")?,
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            reviews,
        })
    }
}

impl TryFrom<ReviewRow> for Review {
    type Error = DbError;

    fn try_from(r: ReviewRow) -> DbErrorResult<Self> {
        let rating = u8::try_from(r.rating).map_err(|_| DbError::Initialization {
            message: format!("Invalid rating in product_reviews.rating: {}", r.rating),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Review {
            id: r.id,
            rating,
            comment: r.comment,
            customer_name: r.customer_name,
            created_at: parse_timestamp(r.created_at, "product_reviews.created_at")?,
        })
    }
}

pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All products ordered by id, each with its reviews
    pub async fn find_all(&self) -> DbErrorResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
                SELECT id, name, description, thumbnails, colors, price, stock
                FROM products
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let review_rows = sqlx::query_as::<_, ReviewRow>(
            r#"
                SELECT id, product_id, rating, comment, customer_name, created_at
                FROM product_reviews
                ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut reviews_by_product: HashMap<String, Vec<Review>> = HashMap::new();
        for row in review_rows {
            let product_id = row.product_id.clone();
            reviews_by_product
                .entry(product_id)
                .or_default()
                .push(Review::try_from(row)?);
        }

        rows.into_iter()
            .map(|row| {
                let reviews = reviews_by_product.remove(&row.id).unwrap_or_default();
                row.into_product(reviews)
            })
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Product>> {
        let Some(row) = sqlx::query_as::<_, ProductRow>(
            r#"
                SELECT id, name, description, thumbnails, colors, price, stock
                FROM products
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let reviews = sqlx::query_as::<_, ReviewRow>(
            r#"
                SELECT id, product_id, rating, comment, customer_name, created_at
                FROM product_reviews
                WHERE product_id = ?
                ORDER BY created_at, id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Review::try_from)
        .collect::<DbErrorResult<Vec<_>>>()?;

        row.into_product(reviews).map(Some)
    }

    /// Insert `product` under the next free catalog id and return it.
    ///
    /// Any id already set on `product` is replaced.
    pub async fn create(&self, mut product: Product) -> DbErrorResult<Product> {
        let thumbnails = encode_list(&product.thumbnails)?;
        let colors = encode_list(&product.colors)?;

        let mut tx = self.pool.begin().await?;

        let highest: Option<i64> = sqlx::query_scalar(
            r#"
                SELECT MAX(CAST(SUBSTR(id, 5) AS INTEGER))
                FROM products
                WHERE id GLOB 'PROD[0-9]*'
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let next = highest.unwrap_or(0) + 1;
        let sequence = u32::try_from(next).map_err(|_| DbError::Initialization {
            message: format!("Product id sequence overflow: {}", next),
            location: ErrorLocation::from(Location::caller()),
        })?;
        product.id = Product::catalog_id(sequence);

        sqlx::query(
            r#"
                INSERT INTO products (id, name, description, thumbnails, colors, price, stock, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(thumbnails)
        .bind(colors)
        .bind(product.price)
        .bind(product.stock)
        .bind(Utc::now().timestamp())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(product)
    }
}
