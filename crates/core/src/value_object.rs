//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two products with
/// the same id, name and price are interchangeable. To "modify" one, build a new
/// value.
///
/// - **Value Object**: `Money(500)`, a catalog `Product`
/// - **Entity**: a cart line, identified by its product id while its quantity changes
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
