//! Atelier Domain Concerns

pub mod games;
pub mod inquiries;
pub mod inventory;
pub mod models;
pub mod orders;
pub mod photos;
pub mod settings;
