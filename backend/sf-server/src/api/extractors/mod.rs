pub mod auth_token;
pub mod current_user;
