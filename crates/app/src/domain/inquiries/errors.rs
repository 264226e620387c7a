//! Inquiries service errors.

use thiserror::Error;

use crate::store::{StoreError, StoreErrorKind};

#[derive(Debug, Error)]
pub enum InquiriesServiceError {
    #[error("inquiry not found")]
    NotFound,

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for InquiriesServiceError {
    fn from(error: StoreError) -> Self {
        match error.kind() {
            StoreErrorKind::NoRows => Self::NotFound,
            StoreErrorKind::NotNullViolation => Self::MissingRequiredData,
            StoreErrorKind::CheckViolation => Self::InvalidData,
            StoreErrorKind::UniqueViolation
            | StoreErrorKind::ForeignKeyViolation
            | StoreErrorKind::Other => Self::Store(error),
        }
    }
}
