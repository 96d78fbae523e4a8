//! Product catalog domain module.
//!
//! This crate contains the canonical product definitions, implemented purely
//! as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::{Catalog, Product, ProductCode};
