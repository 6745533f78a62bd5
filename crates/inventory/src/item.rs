use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult, Entity, EntityId};

use crate::category::Category;

/// Stock item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockItemId(pub EntityId);

impl StockItemId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for StockItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A stock-keeping item as seen by replenishment: what it is, where it is
/// filed, how many units are on hand and when to reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockItem {
    id: StockItemId,
    name: String,
    category: Category,
    quantity: i64,
    reorder_level: i64,
}

impl StockItem {
    pub fn new(
        id: StockItemId,
        name: impl Into<String>,
        category: Category,
        quantity: i64,
        reorder_level: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        if reorder_level < 0 {
            return Err(DomainError::validation("reorder level cannot be negative"));
        }
        Ok(Self {
            id,
            name,
            category,
            quantity,
            reorder_level,
        })
    }

    pub fn id_typed(&self) -> StockItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }

    /// Strictly below the reorder level; an item sitting exactly on it does
    /// not need replenishing yet.
    pub fn needs_reorder(&self) -> bool {
        self.quantity < self.reorder_level
    }
}

impl Entity for StockItem {
    type Id = StockItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
