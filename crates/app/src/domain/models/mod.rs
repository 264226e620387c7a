//! Live2D Models

pub mod errors;
pub mod service;

pub use errors::ModelsServiceError;
pub use service::*;
