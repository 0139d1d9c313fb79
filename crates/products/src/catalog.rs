//! Catalog source: the products a page offers.

use std::collections::HashSet;

use shopcart_core::{DomainError, DomainResult, ProductId};

use crate::product::{Product, parse_price_label};

/// Ordered list of products, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {} in catalog",
                    product.id()
                )));
            }
        }

        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Parse a JSON array of `{ "id", "name", "price" }` objects.
    pub fn from_json(text: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(text)
            .map_err(|e| DomainError::validation(format!("invalid catalog JSON: {e}")))?;
        Self::new(products)
    }

    /// Build a catalog from page cards given as `(title, price_label)` pairs.
    ///
    /// Cards are numbered from 1 in page order; prices are read from the
    /// leading integer of the label (see [`parse_price_label`]).
    pub fn from_cards<I, T, P>(cards: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (T, P)>,
        T: AsRef<str>,
        P: AsRef<str>,
    {
        let products = cards
            .into_iter()
            .enumerate()
            .map(|(index, (title, label))| {
                let id = ProductId::new(index as u64 + 1);
                let price = parse_price_label(label.as_ref())?;
                Product::new(id, title.as_ref(), price)
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(products)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::Money;

    fn product(id: u64, name: &str, price: u64) -> Product {
        Product::new(ProductId::new(id), name, Money::new(price)).unwrap()
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, "A", 5), product(1, "B", 6)]).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("duplicate product id 1") => {}
            _ => panic!("Expected InvariantViolation for duplicate ids"),
        }
    }

    #[test]
    fn from_json_keeps_order() {
        let catalog = Catalog::from_json(
            r#"[
                {"id": 2, "name": "Banana", "price": 250},
                {"id": 1, "name": "Apple", "price": 500}
            ]"#,
        )
        .unwrap();

        let names: Vec<_> = catalog.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Banana", "Apple"]);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().price(), Money::new(500));
        assert!(catalog.get(ProductId::new(3)).is_none());
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let err = Catalog::from_json(r#"[{"id": 1, "name": "A"}]"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.starts_with("invalid catalog JSON")));
    }

    #[test]
    fn from_cards_numbers_from_one() {
        let catalog =
            Catalog::from_cards([("Attiéké", "500 FCFA"), ("Alloco", " 300 FCFA")]).unwrap();

        assert_eq!(catalog.len(), 2);
        let first = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(first.name(), "Attiéké");
        assert_eq!(first.price(), Money::new(500));
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().price(), Money::new(300));
    }

    #[test]
    fn from_cards_rejects_unpriced_card() {
        let err = Catalog::from_cards([("Mystery", "price on request")]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::from_cards(Vec::<(&str, &str)>::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!((&catalog).into_iter().count(), 0);
    }
}
