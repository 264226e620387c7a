//! Games

pub mod errors;
pub mod service;

pub use errors::GamesServiceError;
pub use service::*;
