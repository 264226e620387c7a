//! Photos

pub mod errors;
pub mod service;

pub use errors::PhotosServiceError;
pub use service::*;
