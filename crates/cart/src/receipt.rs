use serde::{Deserialize, Serialize};

use storefront_core::{Money, Weight};
use storefront_shipping::ShippingMethod;

/// One printed line of the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

/// Priced summary of a checkout.
///
/// A receipt is a pure read of the cart: producing one mutates nothing, and
/// clearing the cart afterwards is a separate step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total_weight: Weight,
    pub method: ShippingMethod,
    pub shipping_cost: Money,
    pub subtotal: Money,
    pub total: Money,
}

impl core::fmt::Display for Receipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items in the cart:")?;
        for line in &self.lines {
            writeln!(f, "{} - {} x {}", line.name, line.unit_price, line.quantity)?;
        }
        writeln!(f, "Total weight: {}", self.total_weight)?;
        writeln!(f, "Shipping cost: {}", self.shipping_cost)?;
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        write!(f, "Total cost: {}", self.total)
    }
}
