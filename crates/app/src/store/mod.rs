//! Catalog store
//!
//! Row-level access to the hosted relational store. Rows travel as JSON
//! objects; the domain services decode them into catalog records.

use std::fmt::{Display, Formatter, Result as FmtResult};

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

pub mod errors;
pub mod query;
pub mod rest;
pub mod rows;

pub use errors::{StoreError, StoreErrorKind};
pub use query::{Direction, Filter, Query};
pub use rest::RestCatalogStore;

/// Tables the application reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Photos,
    PhotoInventory,
    Orders,
    Live2dModels,
    Games,
    SiteSettings,
    Inquiries,
}

impl Table {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photos => "photos",
            Self::PhotoInventory => "photo_inventory",
            Self::Orders => "orders",
            Self::Live2dModels => "live2d_models",
            Self::Games => "games",
            Self::SiteSettings => "site_settings",
            Self::Inquiries => "inquiries",
        }
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[automock]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Rows of `table` matching `query`, in the order it asks for.
    async fn select(&self, table: Table, query: Query) -> Result<Vec<Value>, StoreError>;

    /// Insert one row and return it as stored.
    async fn insert(&self, table: Table, row: Value) -> Result<Value, StoreError>;

    /// Apply `patch` to every row matching `filter`; returns the updated rows.
    async fn update(
        &self,
        table: Table,
        filter: Filter,
        patch: Value,
    ) -> Result<Vec<Value>, StoreError>;

    /// Delete every row matching `filter`; returns how many went.
    async fn delete(&self, table: Table, filter: Filter) -> Result<usize, StoreError>;
}
