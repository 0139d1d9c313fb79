//! Products domain module.
//!
//! Catalog values the cart refers to, plus the loaders that turn a page's
//! product listing into a [`Catalog`]. Pure domain logic (no IO).

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Product, parse_price_label};
