pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use models::address::{ADDRESS_REQUIRED_FIELDS, Address, AddressInput, is_valid_pincode};
pub use models::new_product::NewProduct;
pub use models::new_user::{MIN_PASSWORD_LENGTH, NewUser, ValidatedNewUser};
pub use models::product::{PLACEHOLDER_THUMBNAIL, Product};
pub use models::review::Review;
pub use models::session::Session;
pub use models::user::User;
pub use store::address_store::AddressStore;
pub use store::store_error::{StoreError, StoreResult};
