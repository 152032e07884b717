//! Product catalog REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, ListProductsQuery, ProductListResponse,
    ProductResponse, ProductSummaryDto, parse_json,
};

use sf_core::NewProduct;
use sf_db::ProductRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use bytes::Bytes;
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/products?id=<id>
///
/// List all products, marking the one whose id matches `?id=` as selected
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> ApiResult<Json<ProductListResponse>> {
    debug!("Listing products (selected: {:?})", query.id);
    let products = ProductRepository::new(state.pool.clone()).find_all().await?;
    let selected = query.id.as_deref();

    Ok(Json(ProductListResponse {
        products: products
            .into_iter()
            .map(|p| ProductSummaryDto::from_product(p, selected))
            .collect(),
    }))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductResponse>> {
    debug!("Fetching product {}", id);
    let product = ProductRepository::new(state.pool.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product {} not found", id)))?;

    Ok(Json(ProductResponse { product }))
}

/// POST /api/products
///
/// Add a product from the admin dashboard; requires a live session
pub async fn create_product(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let new_product: NewProduct = parse_json(&body)?;
    let product = new_product.validate()?;

    let product = ProductRepository::new(state.pool.clone())
        .create(product)
        .await?;

    info!("User {} added product {}", user.user_id, product.id);

    Ok((StatusCode::CREATED, Json(ProductResponse { product })))
}
