use sf_core::User;

use serde::Serialize;

/// Single account response (never carries the password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}
