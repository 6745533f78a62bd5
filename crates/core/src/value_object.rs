//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: a category code
/// or a contact address has no identity of its own. To "modify" one, build a
/// new one.
///
/// - **Value Object**: no identity (two values with the same fields are equal)
/// - **Entity**: has identity (two entities with the same id are the same entity)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
