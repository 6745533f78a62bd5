use restock_inventory::{Category, StockItem};
use restock_parties::Supplier;

use crate::pending::PendingGroups;

/// A supplier-declared category that has pending items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedSection<'a> {
    /// The category as the supplier declares it (its label heads the section).
    pub category: &'a Category,
    /// Pending items for that code, in arrival order.
    pub items: &'a [StockItem],
}

/// Result of matching one supplier against the pending groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierMatch<'a> {
    supplier: &'a Supplier,
    sections: Vec<MatchedSection<'a>>,
}

impl<'a> SupplierMatch<'a> {
    pub fn supplier(&self) -> &'a Supplier {
        self.supplier
    }

    /// Matched sections, in the supplier's declared category order.
    pub fn sections(&self) -> &[MatchedSection<'a>] {
        &self.sections
    }

    /// A supplier with nothing to quote for gets no message.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Intersect a supplier's declared categories with the pending ones, by code.
///
/// Walks the supplier's own category order; pending order only decides item
/// order inside a section.
pub fn match_supplier<'a>(supplier: &'a Supplier, pending: &'a PendingGroups) -> SupplierMatch<'a> {
    let sections = supplier
        .categories()
        .iter()
        .filter_map(|category| {
            pending
                .get(category.code())
                .filter(|items| !items.is_empty())
                .map(|items| MatchedSection { category, items })
        })
        .collect();

    SupplierMatch { supplier, sections }
}

/// Match every supplier, in directory order. Empty matches are kept so the
/// output lines up one-to-one with `suppliers`.
pub fn match_suppliers<'a>(
    suppliers: &'a [Supplier],
    pending: &'a PendingGroups,
) -> Vec<SupplierMatch<'a>> {
    suppliers
        .iter()
        .map(|supplier| match_supplier(supplier, pending))
        .collect()
}
