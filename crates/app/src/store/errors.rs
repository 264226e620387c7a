//! Catalog store errors.

use serde::Deserialize;
use thiserror::Error;

/// Error body returned by the store's REST interface.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default)]
    pub hint: Option<String>,
}

/// What went wrong, as far as callers need to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    UniqueViolation,
    ForeignKeyViolation,
    NotNullViolation,
    CheckViolation,
    NoRows,
    Other,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog store request failed")]
    Transport(#[source] reqwest::Error),

    #[error("catalog store rejected the request with status {status}: {}", .body.message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, body: ErrorBody },

    #[error("catalog store row could not be decoded")]
    Decode(#[source] serde_json::Error),

    #[error("record could not be encoded for the catalog store")]
    Encode(#[source] serde_json::Error),

    #[error("catalog store returned no rows")]
    Empty,
}

impl StoreError {
    /// Classify the error by the database error code it carries.
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::Rejected { body, .. } => match body.code.as_deref() {
                Some("23505") => StoreErrorKind::UniqueViolation,
                Some("23503") => StoreErrorKind::ForeignKeyViolation,
                Some("23502") => StoreErrorKind::NotNullViolation,
                Some("23514") => StoreErrorKind::CheckViolation,
                Some("PGRST116") => StoreErrorKind::NoRows,
                _ => StoreErrorKind::Other,
            },
            Self::Empty => StoreErrorKind::NoRows,
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => StoreErrorKind::Other,
        }
    }
}
