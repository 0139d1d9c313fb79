use serde::{Deserialize, Serialize};

use shopcart_core::{Entity, Money, ProductId};
use shopcart_products::Product;

/// Cart entry: one product and how many of it.
///
/// `quantity` is at least 1 for every line held by a [`crate::Cart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product: Product,
    quantity: u64,
}

impl CartLine {
    pub(crate) fn new(product: Product, quantity: u64) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    /// `quantity × unit price`.
    pub fn line_total(&self) -> Money {
        self.product.price().times(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.product.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_is_quantity_times_price() {
        let product = Product::new(ProductId::new(1), "A", Money::new(500)).unwrap();
        let line = CartLine::new(product, 3);
        assert_eq!(line.line_total(), Money::new(1500));
        assert_eq!(line.id(), ProductId::new(1));
    }
}
