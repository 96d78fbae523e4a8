use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::{Product, ProductCode};
use storefront_core::{Aggregate, AggregateId, AggregateRoot, DomainError, Money, Weight};
use storefront_events::Event;
use storefront_shipping::ShippingMethod;

use crate::receipt::{Receipt, ReceiptLine};

/// Cart identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(pub AggregateId);

impl CartId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One cart line: a product snapshot and its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always >= 1. Re-adding a present product increments the quantity
    /// instead of duplicating the line.
    pub quantity: u32,
}

/// Aggregate root: Cart.
///
/// Lines are keyed by catalog code — product identity — so insertion order is
/// irrelevant and the listing comes out in menu order. The cart is owned by
/// whoever created it; there is no process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: BTreeMap<ProductCode, CartLine>,
    version: u64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: BTreeMap::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity currently in the cart for `code` (0 when absent).
    pub fn quantity(&self, code: ProductCode) -> u32 {
        self.lines.get(&code).map_or(0, |line| line.quantity)
    }

    /// Total weight of the cart contents.
    pub fn total_weight(&self) -> Weight {
        self.lines
            .values()
            .map(|line| line.product.unit_weight() * line.quantity)
            .sum()
    }

    /// Sum of unit price times quantity over all lines, before shipping.
    pub fn subtotal(&self) -> Money {
        self.lines
            .values()
            .map(|line| line.product.unit_price() * line.quantity)
            .sum()
    }

    /// Price the cart under `method` and produce the printable receipt.
    ///
    /// Pure read: the cart is unchanged. Clearing after checkout is a
    /// separate command.
    pub fn checkout(&self, method: ShippingMethod) -> Receipt {
        let total_weight = self.total_weight();
        let shipping_cost = method.quote(total_weight);
        let subtotal = self.subtotal();

        let lines = self
            .lines
            .values()
            .map(|line| ReceiptLine {
                name: line.product.name().to_string(),
                unit_price: line.product.unit_price(),
                quantity: line.quantity,
            })
            .collect();

        Receipt {
            lines,
            total_weight,
            method,
            shipping_cost,
            subtotal,
            total: subtotal + shipping_cost,
        }
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProduct {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddProduct(AddProduct),
    ClearCart(ClearCart),
}

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub product: Product,
    /// Line quantity after this addition.
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ProductAdded(ProductAdded),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ProductAdded(_) => "cart.product.added",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ProductAdded(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ProductAdded(e) => {
                self.lines.insert(
                    e.product.code(),
                    CartLine {
                        product: e.product.clone(),
                        quantity: e.quantity,
                    },
                );
            }
            CartEvent::CartCleared(_) => {
                self.lines.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        // Adding and clearing have no failure modes.
        match command {
            CartCommand::AddProduct(cmd) => Ok(vec![CartEvent::ProductAdded(ProductAdded {
                quantity: self.quantity(cmd.product.code()) + 1,
                product: cmd.product.clone(),
                occurred_at: cmd.occurred_at,
            })]),
            CartCommand::ClearCart(cmd) => Ok(vec![CartEvent::CartCleared(CartCleared {
                occurred_at: cmd.occurred_at,
            })]),
        }
    }
}
