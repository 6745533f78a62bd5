//! Reorder notification run: stock query → grouping → supplier matching →
//! composition → dispatch, strictly sequential and fail-fast.

mod notifier;

pub use notifier::{ReorderNotifier, SharedReorderNotifier};

use thiserror::Error;

use restock_replenishment::SupplierNotification;

use crate::dispatch::DispatchError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ReorderError {
    #[error("failed to read stock below reorder level")]
    Stock(#[source] StoreError),

    #[error("failed to read supplier directory")]
    Directory(#[source] StoreError),

    /// A dispatch failed. Suppliers already notified earlier in the run
    /// stay notified; they are listed here.
    #[error("{failure}; {count} supplier(s) already notified in this run", count = .notified.len())]
    Dispatch {
        #[source]
        failure: DispatchError,
        notified: Vec<SupplierNotification>,
    },
}

impl ReorderError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Stock(_) | Self::Directory(_) => "store_unavailable",
            Self::Dispatch { failure, .. } => failure.code(),
        }
    }
}
