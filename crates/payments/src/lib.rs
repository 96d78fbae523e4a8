//! Payment gateway port and stub adapter.
//!
//! The rest of the system only sees [`PaymentGateway`]; the shipped adapter
//! confirms everything and performs no real money movement.

pub mod gateway;

pub use gateway::{
    CardGateway, GatewayError, GatewayResult, PaymentConfirmation, PaymentGateway,
    PaymentReference,
};
