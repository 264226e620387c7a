//! Inquiries

pub mod errors;
pub mod service;

pub use errors::InquiriesServiceError;
pub use service::*;
