#[allow(clippy::module_inception)]
pub mod auth;
pub mod session_cookie;
pub mod signin_request;
pub mod user_response;
