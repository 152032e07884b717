pub mod cookie_map;
pub mod error;
pub mod password_hasher;
pub mod session_token;

pub use cookie_map::CookieMap;
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;
pub use session_token::{DEFAULT_COOKIE_NAME, SessionToken};
