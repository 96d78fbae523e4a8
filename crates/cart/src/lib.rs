//! Shopping cart domain module.
//!
//! This crate contains the cart aggregate and checkout pricing, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod cart;
pub mod receipt;

pub use cart::{
    AddProduct, Cart, CartCleared, CartCommand, CartEvent, CartId, CartLine, ClearCart,
    ProductAdded,
};
pub use receipt::{Receipt, ReceiptLine};
