//! Application layer: hosted store clients, domain services and the flows built on them.

pub mod admin;
pub mod checkout;
pub mod config;
pub mod context;
pub mod domain;
pub mod hosted;
pub mod logging;
pub mod notifications;
pub mod shop;
pub mod storage;
pub mod store;
pub mod uploads;

#[cfg(test)]
mod test;
