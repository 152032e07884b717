use crate::{
    AppState, create_product, get_product, get_shipping_address, health, list_products, metrics,
    set_shipping_address, signin, signout, signup,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Shipping address (session cookie required)
        .route(
            "/api/protected/user/shipping-address",
            get(get_shipping_address).post(set_shipping_address),
        )
        // Accounts
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
        .route("/api/auth/signout", post(signout))
        // Product catalog
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", get(get_product))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(metrics::prometheus_metrics))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
