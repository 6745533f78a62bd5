use std::collections::HashMap;

use restock_inventory::{Category, CategoryCode, StockItem};

/// One category bucket: the category as first seen, and its items in
/// arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGroup {
    category: Category,
    items: Vec<StockItem>,
}

impl PendingGroup {
    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }
}

/// Below-threshold items grouped by category code.
///
/// Iteration order is load-bearing (it drives message layout), so buckets
/// live in an insertion-ordered `Vec`; the `HashMap` is only a code → slot
/// index for lookups and is never iterated.
#[derive(Debug, Clone, Default)]
pub struct PendingGroups {
    groups: Vec<PendingGroup>,
    index: HashMap<CategoryCode, usize>,
}

impl PendingGroups {
    /// Group candidate items by category code.
    ///
    /// - Buckets appear in the order their code is first seen.
    /// - Items keep their relative order inside a bucket.
    /// - No sorting, no filtering: callers pass items already known to be
    ///   below their reorder level.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = StockItem>,
    {
        let mut pending = Self::default();
        for item in items {
            pending.push(item);
        }
        pending
    }

    fn push(&mut self, item: StockItem) {
        let code = item.category().code().clone();
        if let Some(&slot) = self.index.get(&code) {
            self.groups[slot].items.push(item);
            return;
        }

        self.index.insert(code, self.groups.len());
        self.groups.push(PendingGroup {
            category: item.category().clone(),
            items: vec![item],
        });
    }

    /// Items pending for `code`, if any.
    pub fn get(&self, code: &CategoryCode) -> Option<&[StockItem]> {
        self.index
            .get(code)
            .map(|&slot| self.groups[slot].items.as_slice())
    }

    pub fn contains(&self, code: &CategoryCode) -> bool {
        self.index.contains_key(code)
    }

    /// Buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingGroup> {
        self.groups.iter()
    }

    /// Number of category buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of items across all buckets.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}
