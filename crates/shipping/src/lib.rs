//! Shipping rate policies.
//!
//! Pure weight-to-cost policies; no carrier integration.

pub mod method;

pub use method::ShippingMethod;
