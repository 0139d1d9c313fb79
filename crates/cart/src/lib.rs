//! Shopping cart domain module.
//!
//! The cart is a command/event driven aggregate: it decides what a mutation
//! means, applies it, and reports what changed. It never renders; the widget
//! layer reads its computed fields after each change.

pub mod cart;
pub mod line;

pub use cart::{
    AddItem, Cart, CartCommand, CartEvent, LineAdded, LineRemoved, MAX_LINE_QUANTITY, QuantityChanged,
    RemoveItem, UpdateQuantity,
};
pub use line::CartLine;
