//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two values with
/// the same attributes are the same thing. `Money::from_cents(100)` equals
/// `Money::from_cents(100)` no matter where either came from. To "modify" a
/// value object, build a new one.
///
/// The bounds are the minimum a value needs to behave like one: cheap to copy
/// around (`Clone`), comparable by attributes (`PartialEq`), and printable in
/// logs and test failures (`Debug`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
