use serde::{Deserialize, Serialize};

use restock_core::{DomainError, ValueObject};

/// Stable category code: the grouping and matching key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryCode(String);

impl CategoryCode {
    /// Build a code, trimming surrounding whitespace. Empty codes are rejected.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("category code cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CategoryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryCode> for String {
    fn from(value: CategoryCode) -> Self {
        value.0
    }
}

impl ValueObject for CategoryCode {}

/// Product category: a stable code plus a human-readable label.
///
/// Two categories describe the same bucket when their codes are equal; the
/// label is presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    code: CategoryCode,
    label: String,
}

impl Category {
    pub fn new(code: CategoryCode, label: impl Into<String>) -> Self {
        Self {
            code,
            label: label.into(),
        }
    }

    pub fn code(&self) -> &CategoryCode {
        &self.code
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Code equality; labels are ignored.
    pub fn same_code(&self, other: &Category) -> bool {
        self.code == other.code
    }
}

impl ValueObject for Category {}
