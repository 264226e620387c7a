//! Inventory

pub mod errors;
pub mod service;

pub use errors::InventoryServiceError;
pub use service::*;
