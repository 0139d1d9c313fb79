use serde::{Deserialize, Serialize};

use shopcart_core::{Aggregate, DomainError, DomainResult, Entity, Money, ProductId};
use shopcart_events::{Event, execute};
use shopcart_products::Product;

use crate::line::CartLine;

/// Largest quantity a line can hold, so every quantity round-trips through the
/// signed quantities that commands carry.
pub const MAX_LINE_QUANTITY: u64 = i64::MAX as u64;

/// Aggregate root: Cart.
///
/// Lines are unique by product id and kept in first-add order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines (0 when empty).
    pub fn total_items(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.quantity()))
    }

    /// Sum of line totals (0 when empty).
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add `quantity` units of `product`, merging into an existing line.
    ///
    /// Non-positive quantities are rejected and leave the cart untouched.
    /// Returns whether the cart changed.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> DomainResult<bool> {
        let cmd = CartCommand::AddItem(AddItem {
            product: product.clone(),
            quantity,
        });
        Ok(!self.execute(&cmd)?.is_empty())
    }

    /// Remove the line for `product_id`. Returns `false` if there was none.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let cmd = CartCommand::RemoveItem(RemoveItem { product_id });
        matches!(self.execute(&cmd), Ok(events) if !events.is_empty())
    }

    /// Set the quantity of an existing line; `quantity <= 0` removes it.
    /// Returns `false` if there was no such line.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let cmd = CartCommand::UpdateQuantity(UpdateQuantity {
            product_id,
            quantity,
        });
        matches!(self.execute(&cmd), Ok(events) if !events.is_empty())
    }

    /// Decide and apply a command, returning the applied events.
    pub fn execute(&mut self, command: &CartCommand) -> DomainResult<Vec<CartEvent>> {
        execute(self, command)
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.id() == product_id)
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub product: Product,
    pub quantity: i64,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub product_id: ProductId,
}

/// Command: UpdateQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantity {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    UpdateQuantity(UpdateQuantity),
}

impl CartCommand {
    /// Product the command targets.
    pub fn product_id(&self) -> ProductId {
        match self {
            CartCommand::AddItem(cmd) => cmd.product.id(),
            CartCommand::RemoveItem(cmd) => cmd.product_id,
            CartCommand::UpdateQuantity(cmd) => cmd.product_id,
        }
    }
}

/// Event: LineAdded (first add of a product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdded {
    pub product: Product,
    pub quantity: u64,
}

/// Event: QuantityChanged. `quantity` is the line's new quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Event: LineRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    LineAdded(LineAdded),
    QuantityChanged(QuantityChanged),
    LineRemoved(LineRemoved),
}

impl CartEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::LineAdded(e) => e.product.id(),
            CartEvent::QuantityChanged(e) => e.product_id,
            CartEvent::LineRemoved(e) => e.product_id,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "cart.line.added",
            CartEvent::QuantityChanged(_) => "cart.line.quantity_changed",
            CartEvent::LineRemoved(_) => "cart.line.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::LineAdded(e) => match self.position(e.product.id()) {
                Some(idx) => self.lines[idx].set_quantity(e.quantity),
                None => self.lines.push(CartLine::new(e.product.clone(), e.quantity)),
            },
            CartEvent::QuantityChanged(e) => {
                if let Some(idx) = self.position(e.product_id) {
                    if e.quantity == 0 {
                        self.lines.remove(idx);
                    } else {
                        self.lines[idx].set_quantity(e.quantity);
                    }
                }
            }
            CartEvent::LineRemoved(e) => {
                self.lines.retain(|l| l.id() != e.product_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add_item(cmd),
            CartCommand::RemoveItem(cmd) => Ok(self.handle_remove_item(cmd)),
            CartCommand::UpdateQuantity(cmd) => Ok(self.handle_update_quantity(cmd)),
        }
    }
}

impl Cart {
    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        if cmd.quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let quantity = cmd.quantity as u64;
        let product_id = cmd.product.id();

        match self.line(product_id) {
            Some(line) => {
                let merged = line
                    .quantity()
                    .checked_add(quantity)
                    .filter(|&q| q <= MAX_LINE_QUANTITY)
                    .ok_or_else(|| DomainError::validation("quantity overflow"))?;
                Ok(vec![CartEvent::QuantityChanged(QuantityChanged {
                    product_id,
                    quantity: merged,
                })])
            }
            None => Ok(vec![CartEvent::LineAdded(LineAdded {
                product: cmd.product.clone(),
                quantity,
            })]),
        }
    }

    fn handle_remove_item(&self, cmd: &RemoveItem) -> Vec<CartEvent> {
        if self.position(cmd.product_id).is_none() {
            return Vec::new();
        }
        vec![CartEvent::LineRemoved(LineRemoved {
            product_id: cmd.product_id,
        })]
    }

    fn handle_update_quantity(&self, cmd: &UpdateQuantity) -> Vec<CartEvent> {
        if self.position(cmd.product_id).is_none() {
            return Vec::new();
        }

        if cmd.quantity <= 0 {
            return self.handle_remove_item(&RemoveItem {
                product_id: cmd.product_id,
            });
        }

        vec![CartEvent::QuantityChanged(QuantityChanged {
            product_id: cmd.product_id,
            quantity: cmd.quantity as u64,
        })]
    }
}
