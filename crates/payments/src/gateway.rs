use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use storefront_core::Money;

/// Result type for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Payment gateway failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The provider refused the payment.
    #[error("payment declined: {0}")]
    Declined(String),
}

/// Reference attached to a processed payment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentReference(Uuid);

impl PaymentReference {
    /// New time-ordered reference.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PaymentReference {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Confirmation record for a processed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub reference: PaymentReference,
    pub amount: Money,
    pub processed_at: DateTime<Utc>,
}

/// Port towards a payment provider.
///
/// `details` is the raw email-or-card-number text captured at the prompt; it
/// is passed through verbatim and is neither validated nor stored.
pub trait PaymentGateway {
    fn process_payment(&self, amount: Money, details: &str) -> GatewayResult<PaymentConfirmation>;
}

/// Credit card gateway stub.
///
/// Confirms every payment and logs it; no provider call, no idempotency key.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardGateway;

impl CardGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentGateway for CardGateway {
    fn process_payment(&self, amount: Money, _details: &str) -> GatewayResult<PaymentConfirmation> {
        let confirmation = PaymentConfirmation {
            reference: PaymentReference::new(),
            amount,
            processed_at: Utc::now(),
        };

        info!(
            amount = %amount,
            reference = %confirmation.reference,
            "processing credit card payment"
        );

        Ok(confirmation)
    }
}
