use serde::{Deserialize, Serialize};

use crate::compose::format_item_line;
use crate::matching::SupplierMatch;

/// One category heading and its formatted item lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub label: String,
    pub items: Vec<String>,
}

/// Summary of the quote request sent to one supplier.
///
/// `items_by_category` serializes as a JSON object whose keys are written in
/// section order. Sections whose categories share a label are merged under
/// that label, items kept in section order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierNotification {
    supplier: String,
    email: String,
    #[serde(with = "sections_as_map")]
    items_by_category: Vec<CategorySection>,
}

impl SupplierNotification {
    pub fn from_match(matched: &SupplierMatch<'_>) -> Self {
        let supplier = matched.supplier();
        let mut items_by_category: Vec<CategorySection> = Vec::new();
        for section in matched.sections() {
            let label = section.category.label();
            let lines = section.items.iter().map(format_item_line);
            // Labels are JSON keys: codes sharing a label share one entry.
            match items_by_category.iter_mut().find(|s| s.label == label) {
                Some(existing) => existing.items.extend(lines),
                None => items_by_category.push(CategorySection {
                    label: label.to_string(),
                    items: lines.collect(),
                }),
            }
        }

        Self {
            supplier: supplier.name().to_string(),
            email: supplier.contact().as_str().to_string(),
            items_by_category,
        }
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn items_by_category(&self) -> &[CategorySection] {
        &self.items_by_category
    }

    /// Item lines under `label`, if that section exists.
    pub fn items_for(&self, label: &str) -> Option<&[String]> {
        self.items_by_category
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.items.as_slice())
    }
}

mod sections_as_map {
    use core::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::CategorySection;

    pub fn serialize<S>(sections: &[CategorySection], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(sections.len()))?;
        for section in sections {
            map.serialize_entry(&section.label, &section.items)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<CategorySection>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = Vec<CategorySection>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category label to item lines")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut sections = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, items)) = access.next_entry::<String, Vec<String>>()? {
                    sections.push(CategorySection { label, items });
                }
                Ok(sections)
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}
