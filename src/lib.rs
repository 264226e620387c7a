//! Atelier
//!
//! Atelier is the storefront core of a photography portfolio: print inventory, carts, order
//! snapshots and the admin panel, with no I/O of its own.

pub mod admin;
pub mod availability;
pub mod cart;
pub mod catalog;
pub mod items;
pub mod media;
pub mod orders;
pub mod pricing;
pub mod storefront;
pub mod uuids;
