//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - they have no
/// identity of their own. To "modify" one, create a new one with the new
/// values; the quality/sell-in newtypes in this crate follow that pattern with
/// consuming methods that return the updated value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
