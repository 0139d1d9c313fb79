//! Read model handed to presenters.

use serde::{Deserialize, Serialize};

use shopcart_cart::{Cart, CartLine};
use shopcart_core::{Entity, Money, ProductId};

/// One rendered cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u64,
    pub line_total: Money,
}

impl From<&CartLine> for LineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.id(),
            name: line.product().name().to_string(),
            unit_price: line.product().price(),
            quantity: line.quantity(),
            line_total: line.line_total(),
        }
    }
}

/// Everything a presentation surface shows: the line list, the count and
/// total indicators, and whether the cart block is visible at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<LineView>,
    pub total_items: u64,
    pub total_price: Money,
    pub visible: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(LineView::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            visible: !cart.is_empty(),
        }
    }
}
