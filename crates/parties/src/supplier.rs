use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult, Entity, EntityId, ValueObject};
use restock_inventory::{Category, CategoryCode};

const MAX_NAME_LEN: usize = 40;
const MAX_ADDRESS_LEN: usize = 60;

/// Supplier identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub EntityId);

impl SupplierId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// E-mail address a supplier is contacted at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactAddress(String);

impl ContactAddress {
    /// Accepts `local@domain.tld`: exactly one `@`, non-empty local part, a
    /// dotted domain, no whitespace, at most 60 characters.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let addr = raw.trim();

        if addr.is_empty() {
            return Err(DomainError::validation("contact address cannot be empty"));
        }
        if addr.chars().count() > MAX_ADDRESS_LEN {
            return Err(DomainError::validation(format!(
                "contact address longer than {MAX_ADDRESS_LEN} characters"
            )));
        }
        if addr.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("contact address contains whitespace"));
        }

        let Some((local, domain)) = addr.split_once('@') else {
            return Err(DomainError::validation("contact address is missing '@'"));
        };
        if local.is_empty() || domain.contains('@') {
            return Err(DomainError::validation(format!(
                "malformed contact address: {addr}"
            )));
        }
        let labels_ok = domain.split('.').all(|label| !label.is_empty());
        if !domain.contains('.') || !labels_ok {
            return Err(DomainError::validation(format!(
                "malformed contact address domain: {domain}"
            )));
        }

        Ok(Self(addr.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ContactAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContactAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ContactAddress> for String {
    fn from(value: ContactAddress) -> Self {
        value.0
    }
}

impl ValueObject for ContactAddress {}

/// A supplier and the categories it can be asked to quote for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    contact: ContactAddress,
    categories: Vec<Category>,
}

impl Supplier {
    /// Build a supplier record.
    ///
    /// Category order is kept as declared. A code declared twice is kept at
    /// its first position only.
    pub fn new(
        id: SupplierId,
        name: impl Into<String>,
        contact: ContactAddress,
        categories: impl IntoIterator<Item = Category>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "name longer than {MAX_NAME_LEN} characters"
            )));
        }

        let mut declared: Vec<Category> = Vec::new();
        for category in categories {
            if !declared.iter().any(|c| c.same_code(&category)) {
                declared.push(category);
            }
        }

        Ok(Self {
            id,
            name: trimmed.to_string(),
            contact,
            categories: declared,
        })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactAddress {
        &self.contact
    }

    /// Declared categories, in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn provides(&self, code: &CategoryCode) -> bool {
        self.categories.iter().any(|c| c.code() == code)
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn category(code: &str) -> Category {
        Category::new(CategoryCode::new(code).unwrap(), code.to_lowercase())
    }

    fn supplier_id() -> SupplierId {
        SupplierId::new(EntityId::new())
    }

    fn address() -> ContactAddress {
        ContactAddress::parse("orders@acme-pharma.com").unwrap()
    }

    #[test]
    fn accepts_well_formed_address() {
        let addr = ContactAddress::parse(" quotes@supplier.example.org ").unwrap();
        assert_eq!(addr.as_str(), "quotes@supplier.example.org");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in [
            "",
            "no-at-sign.com",
            "@example.com",
            "a@b@example.com",
            "user@localhost",
            "user@example..com",
            "user@.com",
            "us er@example.com",
        ] {
            let err = ContactAddress::parse(raw).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn rejects_overlong_address() {
        let raw = format!("{}@example.com", "a".repeat(60));
        assert!(ContactAddress::parse(raw).is_err());
    }

    #[test]
    fn supplier_name_is_bounded() {
        let err = Supplier::new(supplier_id(), " ", address(), vec![]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let long = "x".repeat(41);
        assert!(Supplier::new(supplier_id(), long, address(), vec![]).is_err());
        assert!(Supplier::new(supplier_id(), "x".repeat(40), address(), vec![]).is_ok());
    }

    #[test]
    fn duplicate_categories_collapse_to_first_position() {
        let s = Supplier::new(
            supplier_id(),
            "Acme",
            address(),
            vec![category("PAIN"), category("COLD"), category("PAIN")],
        )
        .unwrap();

        let codes: Vec<&str> = s.categories().iter().map(|c| c.code().as_str()).collect();
        assert_eq!(codes, vec!["PAIN", "COLD"]);
    }

    #[test]
    fn provides_matches_by_code() {
        let s = Supplier::new(supplier_id(), "Acme", address(), vec![category("PAIN")]).unwrap();
        assert!(s.provides(&CategoryCode::new("PAIN").unwrap()));
        assert!(!s.provides(&CategoryCode::new("COLD").unwrap()));
    }

    proptest! {
        /// Property: declared categories never contain the same code twice
        /// and keep first-occurrence order.
        #[test]
        fn declared_categories_are_unique(codes in prop::collection::vec("[A-D]", 0..20)) {
            let cats: Vec<Category> = codes.iter().map(|c| category(c)).collect();
            let s = Supplier::new(supplier_id(), "Acme", address(), cats).unwrap();

            let mut expected: Vec<String> = Vec::new();
            for c in &codes {
                if !expected.contains(c) {
                    expected.push(c.clone());
                }
            }
            let got: Vec<String> = s.categories().iter().map(|c| c.code().to_string()).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
