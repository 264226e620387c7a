//! Inquiry relay errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("notification request failed")]
    Transport(#[source] reqwest::Error),

    #[error("notification function returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("notification function declined the inquiry: {0}")]
    Declined(String),
}
