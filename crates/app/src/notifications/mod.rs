//! Inquiry notifications
//!
//! Relays contact-form inquiries to the hosted notification function, which
//! emails the site owner.

use async_trait::async_trait;
use atelier::catalog::NewInquiry;
use mockall::automock;

pub mod errors;
pub mod http;

pub use errors::RelayError;
pub use http::{DEFAULT_INQUIRY_FUNCTION, HttpInquiryRelay};

/// What the notification function said about a relayed inquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayReceipt {
    pub message: Option<String>,
    pub warning: Option<String>,
}

#[automock]
#[async_trait]
pub trait InquiryRelay: Send + Sync {
    /// Hand an inquiry to the notification function.
    async fn relay(&self, inquiry: NewInquiry) -> Result<RelayReceipt, RelayError>;
}
