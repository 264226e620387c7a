//! Blob storage errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("blob storage request failed")]
    Transport(#[source] reqwest::Error),

    #[error("blob storage rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },
}
