//! Site Settings

pub mod errors;
pub mod service;

pub use errors::SettingsServiceError;
pub use service::*;
