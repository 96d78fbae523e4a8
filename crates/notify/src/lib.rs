//! Notification listeners for cart events.
//!
//! Delivery is a log line; there is no retry and no delivery guarantee.

pub mod email;

pub use email::EmailListener;
