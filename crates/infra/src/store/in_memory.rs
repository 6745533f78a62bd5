use std::sync::RwLock;

use restock_core::Entity;
use restock_inventory::StockItem;
use restock_parties::Supplier;

use super::{StockQuery, StoreError, SupplierDirectory};

/// In-memory stock + supplier catalog for tests/dev.
///
/// Records keep insertion order; upserting an existing id replaces it in place.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: RwLock<Vec<StockItem>>,
    suppliers: RwLock<Vec<Supplier>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_item(&self, item: StockItem) {
        if let Ok(mut items) = self.items.write() {
            match items.iter_mut().find(|i| i.id() == item.id()) {
                Some(slot) => *slot = item,
                None => items.push(item),
            }
        }
    }

    pub fn upsert_supplier(&self, supplier: Supplier) {
        if let Ok(mut suppliers) = self.suppliers.write() {
            match suppliers.iter_mut().find(|s| s.id() == supplier.id()) {
                Some(slot) => *slot = supplier,
                None => suppliers.push(supplier),
            }
        }
    }

    /// All items, whatever their stock level.
    pub fn items(&self) -> Vec<StockItem> {
        self.items.read().map(|items| items.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl StockQuery for InMemoryCatalog {
    async fn items_below_reorder_level(&self) -> Result<Vec<StockItem>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::query("items_below_reorder_level", "lock poisoned"))?;
        Ok(items.iter().filter(|i| i.needs_reorder()).cloned().collect())
    }
}

#[async_trait::async_trait]
impl SupplierDirectory for InMemoryCatalog {
    async fn suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        let suppliers = self
            .suppliers
            .read()
            .map_err(|_| StoreError::query("suppliers", "lock poisoned"))?;
        Ok(suppliers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restock_core::EntityId;
    use restock_inventory::{Category, CategoryCode, StockItemId};
    use restock_parties::{ContactAddress, SupplierId};

    fn pain() -> Category {
        Category::new(CategoryCode::new("PAIN").unwrap(), "Pain relief")
    }

    fn item(id: StockItemId, name: &str, quantity: i64) -> StockItem {
        StockItem::new(id, name, pain(), quantity, 10).unwrap()
    }

    #[tokio::test]
    async fn only_items_below_reorder_level_are_candidates() {
        let catalog = InMemoryCatalog::new();
        catalog.upsert_item(item(StockItemId::new(EntityId::new()), "Aspirin", 2));
        catalog.upsert_item(item(StockItemId::new(EntityId::new()), "Ibuprofen", 10));
        catalog.upsert_item(item(StockItemId::new(EntityId::new()), "Paracetamol", 9));

        let names: Vec<String> = catalog
            .items_below_reorder_level()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["Aspirin", "Paracetamol"]);
    }

    #[tokio::test]
    async fn upsert_replaces_in_place() {
        let catalog = InMemoryCatalog::new();
        let first = StockItemId::new(EntityId::new());
        catalog.upsert_item(item(first, "Aspirin", 2));
        catalog.upsert_item(item(StockItemId::new(EntityId::new()), "Paracetamol", 1));
        catalog.upsert_item(item(first, "Aspirin", 50));

        assert_eq!(catalog.items().len(), 2);
        let names: Vec<String> = catalog
            .items_below_reorder_level()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["Paracetamol"]);
    }

    #[tokio::test]
    async fn suppliers_keep_insertion_order() {
        let catalog = InMemoryCatalog::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            catalog.upsert_supplier(
                Supplier::new(
                    SupplierId::new(EntityId::new()),
                    name,
                    ContactAddress::parse(format!("{}@example.com", name.to_lowercase())).unwrap(),
                    vec![pain()],
                )
                .unwrap(),
            );
        }

        let names: Vec<String> = catalog
            .suppliers()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }
}
