pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{signin, signout, signup},
        session_cookie,
        signin_request::SignInRequest,
        user_response::UserResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{auth_token::AuthToken, current_user::CurrentUser},
    json_body::parse_json,
    products::{
        list_products_query::ListProductsQuery,
        product_list_response::ProductListResponse,
        product_response::ProductResponse,
        product_summary_dto::ProductSummaryDto,
        products::{create_product, get_product, list_products},
    },
    shipping_address::shipping_address::{get_shipping_address, set_shipping_address},
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use crate::metrics::Metrics;

pub use crate::routes::build_router;
