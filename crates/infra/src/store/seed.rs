//! JSON seed for the in-memory catalog, for running without a database.
//!
//! ```json
//! {
//!   "items": [
//!     { "name": "Aspirin", "category": { "code": "PAIN", "label": "Pain relief" },
//!       "quantity": 2, "reorder_level": 10 }
//!   ],
//!   "suppliers": [
//!     { "name": "Acme", "email": "orders@acme.com",
//!       "categories": [ { "code": "PAIN", "label": "Pain relief" } ] }
//!   ]
//! }
//! ```
//!
//! Records go through the same constructors as store rows; fresh ids are
//! assigned in file order.

use serde::Deserialize;

use restock_core::EntityId;
use restock_inventory::{Category, StockItem, StockItemId};
use restock_parties::{ContactAddress, Supplier, SupplierId};

use super::{InMemoryCatalog, StoreError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemSeed {
    name: String,
    category: Category,
    quantity: i64,
    reorder_level: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SupplierSeed {
    name: String,
    email: String,
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSeed {
    #[serde(default)]
    items: Vec<ItemSeed>,
    #[serde(default)]
    suppliers: Vec<SupplierSeed>,
}

impl CatalogSeed {
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        serde_json::from_str(raw)
            .map_err(|e| StoreError::InvalidRecord(format!("catalog seed: {e}")))
    }

    /// Validate every record and load them into a fresh catalog.
    pub fn into_catalog(self) -> Result<InMemoryCatalog, StoreError> {
        let catalog = InMemoryCatalog::new();

        for (n, seed) in self.items.into_iter().enumerate() {
            let item = StockItem::new(
                StockItemId::new(EntityId::new()),
                seed.name,
                seed.category,
                seed.quantity,
                seed.reorder_level,
            )
            .map_err(|e| StoreError::InvalidRecord(format!("seed item #{n}: {e}")))?;
            catalog.upsert_item(item);
        }

        for (n, seed) in self.suppliers.into_iter().enumerate() {
            let contact = ContactAddress::parse(seed.email)
                .map_err(|e| StoreError::InvalidRecord(format!("seed supplier #{n}: {e}")))?;
            let supplier = Supplier::new(
                SupplierId::new(EntityId::new()),
                seed.name,
                contact,
                seed.categories,
            )
            .map_err(|e| StoreError::InvalidRecord(format!("seed supplier #{n}: {e}")))?;
            catalog.upsert_supplier(supplier);
        }

        Ok(catalog)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }
}
