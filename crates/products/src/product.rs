use serde::{Deserialize, Serialize};

use shopcart_core::{DomainError, DomainResult, Money, ProductId, ValueObject};

/// Catalog product: identifier, display name and unit price.
///
/// Immutable once built; a cart line holds its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

/// Unvalidated wire shape of a product.
#[derive(Debug, Clone, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: Money,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.id, record.name, record.price)
    }
}

impl Product {
    /// Build a product, rejecting blank names.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> DomainResult<Self> {
        let name: String = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            price,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl ValueObject for Product {}

/// Parse the leading integer of a price label such as `"500 FCFA"`.
///
/// Leading whitespace is skipped and parsing stops at the first non-digit, so
/// `"1 500 FCFA"` reads as 1. Labels that do not start with digits, or start
/// with a minus sign, are rejected.
pub fn parse_price_label(label: &str) -> DomainResult<Money> {
    let trimmed = label.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if trimmed.starts_with('-') {
        return Err(DomainError::validation(format!(
            "price cannot be negative: {label:?}"
        )));
    }

    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..digits_end];
    if digits.is_empty() {
        return Err(DomainError::validation(format!(
            "price label has no leading amount: {label:?}"
        )));
    }

    digits
        .parse::<u64>()
        .map(Money::new)
        .map_err(|e| DomainError::validation(format!("price out of range in {label:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_trims_name() {
        let product = Product::new(ProductId::new(1), "  Mango  ", Money::new(500)).unwrap();
        assert_eq!(product.id(), ProductId::new(1));
        assert_eq!(product.name(), "Mango");
        assert_eq!(product.price(), Money::new(500));
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new(ProductId::new(1), "   ", Money::new(500)).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("name cannot be empty") => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn free_products_are_allowed() {
        let product = Product::new(ProductId::new(3), "Sample", Money::ZERO).unwrap();
        assert_eq!(product.price(), Money::ZERO);
    }

    #[test]
    fn deserialize_validates_name() {
        let ok: Product =
            serde_json::from_str(r#"{"id":1,"name":"A","price":500}"#).unwrap();
        assert_eq!(ok.name(), "A");

        let bad = serde_json::from_str::<Product>(r#"{"id":1,"name":"","price":500}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn parse_price_label_reads_leading_integer() {
        assert_eq!(parse_price_label("500 FCFA").unwrap(), Money::new(500));
        assert_eq!(parse_price_label("  1200FCFA").unwrap(), Money::new(1200));
        assert_eq!(parse_price_label("1 500 FCFA").unwrap(), Money::new(1));
        assert_eq!(parse_price_label("+75").unwrap(), Money::new(75));
    }

    #[test]
    fn parse_price_label_rejects_missing_or_negative_amounts() {
        assert!(matches!(
            parse_price_label("FCFA 500"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(parse_price_label(""), Err(DomainError::Validation(_))));
        assert!(matches!(
            parse_price_label("-5 FCFA"),
            Err(DomainError::Validation(msg)) if msg.contains("negative")
        ));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: any rendered amount followed by a currency label parses back.
            #[test]
            fn price_label_recovers_amount(
                amount in any::<u64>(),
                pad in " {0,3}",
                currency in "[A-Z]{0,4}"
            ) {
                let label = format!("{pad}{amount} {currency}");
                prop_assert_eq!(parse_price_label(&label).unwrap(), Money::new(amount));
            }
        }
    }
}
