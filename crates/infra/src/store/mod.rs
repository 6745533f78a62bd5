//! Read-only stock and supplier stores.
//!
//! Replenishment never writes back: both ports are queries over state owned
//! by inventory management and supplier onboarding.

pub mod in_memory;
pub mod postgres;
pub mod seed;

pub use in_memory::InMemoryCatalog;
pub use postgres::PostgresCatalog;
pub use seed::CatalogSeed;

use std::sync::Arc;

use thiserror::Error;

use restock_inventory::StockItem;
use restock_parties::Supplier;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store query '{operation}' failed: {message}")]
    Query {
        operation: &'static str,
        message: String,
    },

    #[error("invalid record in store: {0}")]
    InvalidRecord(String),
}

impl StoreError {
    pub fn query(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Query {
            operation,
            message: message.into(),
        }
    }
}

/// Source of reorder candidates.
#[async_trait::async_trait]
pub trait StockQuery: Send + Sync {
    /// Items whose quantity is strictly below their reorder level, in a
    /// stable store order.
    async fn items_below_reorder_level(&self) -> Result<Vec<StockItem>, StoreError>;
}

/// The supplier directory.
#[async_trait::async_trait]
pub trait SupplierDirectory: Send + Sync {
    /// Every supplier with its declared categories, in a stable store order.
    async fn suppliers(&self) -> Result<Vec<Supplier>, StoreError>;
}

#[async_trait::async_trait]
impl<S> StockQuery for Arc<S>
where
    S: StockQuery + ?Sized,
{
    async fn items_below_reorder_level(&self) -> Result<Vec<StockItem>, StoreError> {
        (**self).items_below_reorder_level().await
    }
}

#[async_trait::async_trait]
impl<S> SupplierDirectory for Arc<S>
where
    S: SupplierDirectory + ?Sized,
{
    async fn suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        (**self).suppliers().await
    }
}
