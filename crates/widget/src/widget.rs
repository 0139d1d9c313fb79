//! Cart widget session: the cart, its cards, and the refresh step.

use shopcart_cart::{AddItem, Cart, CartCommand, CartEvent, RemoveItem, UpdateQuantity};
use shopcart_core::{Aggregate, ProductId};
use shopcart_events::{Event, EventBus, EventEnvelope, InMemoryEventBus, Subscription};
use shopcart_products::Catalog;

use crate::controls::{CardAction, CartRequest, ProductCard};
use crate::error::{WidgetError, WidgetResult};
use crate::presenter::Presenter;
use crate::view::CartView;

/// Aggregate type stamped on published envelopes.
pub const CART_STREAM: &str = "cart";

/// One page session's cart widget.
///
/// Mutations go to the [`Cart`]; when a mutation changed something the widget
/// publishes the resulting events on its bus and renders the presenter once.
/// Refused and no-op mutations publish nothing and do not render.
///
/// A mutation is never rolled back: if publishing or rendering fails after
/// the cart changed, the returned error reports
/// [`WidgetError::cart_changed`] so callers do not retry it.
pub struct CartWidget<P> {
    cart: Cart,
    cards: Vec<ProductCard>,
    presenter: P,
    bus: InMemoryEventBus<EventEnvelope<CartEvent>>,
}

impl<P: Presenter> CartWidget<P> {
    /// Start an empty cart with one card per catalog product.
    pub fn new(catalog: &Catalog, presenter: P) -> Self {
        Self {
            cart: Cart::new(),
            cards: catalog.iter().cloned().map(ProductCard::new).collect(),
            presenter,
            bus: InMemoryEventBus::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn card(&self, product_id: ProductId) -> Option<&ProductCard> {
        self.cards.iter().find(|c| c.product_id() == product_id)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    /// Receive an envelope for every event applied from now on.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<CartEvent>> {
        self.bus.subscribe()
    }

    /// Render the current state regardless of whether anything changed.
    pub fn refresh(&mut self) -> WidgetResult<()> {
        let view = self.view();
        self.presenter.render(&view)
    }

    /// Add `quantity` units of a catalog product. Unknown products and
    /// non-positive quantities are ignored.
    pub fn add_item(&mut self, product_id: ProductId, quantity: i64) -> WidgetResult<bool> {
        let Some(card) = self.card(product_id) else {
            tracing::debug!(%product_id, "add ignored: product not in catalog");
            return Ok(false);
        };
        let product = card.product().clone();
        self.dispatch(CartCommand::AddItem(AddItem { product, quantity }))
    }

    pub fn remove_item(&mut self, product_id: ProductId) -> WidgetResult<bool> {
        self.dispatch(CartCommand::RemoveItem(RemoveItem { product_id }))
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> WidgetResult<bool> {
        self.dispatch(CartCommand::UpdateQuantity(UpdateQuantity {
            product_id,
            quantity,
        }))
    }

    /// Handle a button press on a product card.
    pub fn press(&mut self, product_id: ProductId, action: CardAction) -> WidgetResult<bool> {
        let Some(card) = self.cards.iter_mut().find(|c| c.product_id() == product_id) else {
            tracing::debug!(%product_id, ?action, "press ignored: no such card");
            return Ok(false);
        };
        let request = card.press(action);
        let product = card.product().clone();

        match request {
            CartRequest::Add(quantity) => {
                self.dispatch(CartCommand::AddItem(AddItem { product, quantity }))
            }
            CartRequest::SetQuantity(quantity) => self.update_quantity(product_id, quantity),
            CartRequest::Remove => self.remove_item(product_id),
            CartRequest::Nothing => Ok(false),
        }
    }

    fn dispatch(&mut self, command: CartCommand) -> WidgetResult<bool> {
        let product_id = command.product_id();
        let result = self.cart.execute(&command);
        self.sync_card(product_id);

        let events = match result {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(%product_id, error = %err, "cart command rejected");
                return Ok(false);
            }
        };
        if events.is_empty() {
            tracing::debug!(%product_id, "cart command was a no-op");
            return Ok(false);
        }

        let first_sequence = self.cart.version() + 1 - events.len() as u64;
        for (offset, event) in events.into_iter().enumerate() {
            let sequence = first_sequence + offset as u64;
            tracing::debug!(
                event_type = event.event_type(),
                product_id = %event.product_id(),
                sequence,
                "cart changed"
            );
            self.bus
                .publish(EventEnvelope::new(CART_STREAM, sequence, event))?;
        }

        if let Err(err) = self.refresh() {
            tracing::warn!(%product_id, error = %err, "cart changed but render failed");
            return Err(WidgetError::StaleSurface(Box::new(err)));
        }
        Ok(true)
    }

    fn sync_card(&mut self, product_id: ProductId) {
        let quantity = self.cart.line(product_id).map_or(0, |l| l.quantity());
        if let Some(card) = self.cards.iter_mut().find(|c| c.product_id() == product_id) {
            card.set_count(quantity);
        }
    }
}
