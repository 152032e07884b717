pub mod address;
pub mod new_product;
pub mod new_user;
pub mod product;
pub mod review;
pub mod session;
pub mod user;

/// Absent or empty values count as missing.
pub(crate) fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
