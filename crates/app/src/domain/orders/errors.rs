//! Orders service errors.

use thiserror::Error;

use crate::store::{StoreError, StoreErrorKind};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order number already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for OrdersServiceError {
    fn from(error: StoreError) -> Self {
        match error.kind() {
            StoreErrorKind::UniqueViolation => Self::AlreadyExists,
            StoreErrorKind::NoRows => Self::NotFound,
            StoreErrorKind::ForeignKeyViolation => Self::InvalidReference,
            StoreErrorKind::NotNullViolation => Self::MissingRequiredData,
            StoreErrorKind::CheckViolation => Self::InvalidData,
            StoreErrorKind::Other => Self::Store(error),
        }
    }
}
