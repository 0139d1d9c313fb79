//! `shopcart-widget` — the cart as a page widget.
//!
//! Wires a [`shopcart_cart::Cart`] to product cards and a presentation
//! adapter. The cart decides and applies changes; [`CartWidget`] is the
//! notification step that publishes those changes and refreshes the surface.

pub mod config;
pub mod controls;
pub mod error;
pub mod presenter;
pub mod view;
pub mod widget;

pub use config::WidgetConfig;
pub use controls::{CardAction, ProductCard};
pub use error::{WidgetError, WidgetResult};
pub use presenter::{JsonPresenter, Presenter, TextPresenter, render_text};
pub use view::{CartView, LineView};
pub use widget::{CART_STREAM, CartWidget};
