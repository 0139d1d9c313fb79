//! Per-product card controls (count display, +, −, delete).

use serde::{Deserialize, Serialize};

use shopcart_cart::MAX_LINE_QUANTITY;
use shopcart_core::ProductId;
use shopcart_products::Product;

/// A button press on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAction {
    Increment,
    Decrement,
    Delete,
}

/// What a card press asks of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CartRequest {
    Add(i64),
    SetQuantity(i64),
    Remove,
    Nothing,
}

/// Card state for one catalog product.
///
/// The count mirrors the quantity the shopper picked on this card; the delete
/// button is only shown while that count is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    product: Product,
    count: u64,
}

impl ProductCard {
    pub fn new(product: Product) -> Self {
        Self { product, count: 0 }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn delete_visible(&self) -> bool {
        self.count > 0
    }

    /// Update the displayed count and say what the cart should do.
    pub(crate) fn press(&mut self, action: CardAction) -> CartRequest {
        match action {
            CardAction::Increment => {
                self.count = self.count.saturating_add(1);
                CartRequest::Add(1)
            }
            CardAction::Decrement if self.count > 0 => {
                self.count -= 1;
                // Counts mirror cart lines, which never exceed MAX_LINE_QUANTITY.
                CartRequest::SetQuantity(self.count.min(MAX_LINE_QUANTITY) as i64)
            }
            CardAction::Decrement => CartRequest::Nothing,
            CardAction::Delete => {
                self.count = 0;
                CartRequest::Remove
            }
        }
    }

    /// Mirror the cart's quantity for this product.
    pub(crate) fn set_count(&mut self, count: u64) {
        self.count = count;
    }
}
