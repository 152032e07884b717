use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure kinds an [`AddressStore`](crate::AddressStore) reports.
///
/// The variant decides the HTTP status; callers never inspect messages.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The token does not resolve to a live session
    #[error("Invalid or expired session {location}")]
    InvalidSession { location: ErrorLocation },

    /// The store refused the write; `message` is safe to show the client
    #[error("Rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    /// Anything else; `message` is internal detail
    #[error("Store failure: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn invalid_session() -> Self {
        StoreError::InvalidSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        StoreError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        StoreError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
