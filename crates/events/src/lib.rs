//! `shopcart-events` — event mechanics shared by the cart and its widget.
//!
//! Domain crates define their own event enums and implement [`Event`]; this
//! crate only provides the plumbing: envelopes, the decide/apply helper, and a
//! synchronous in-memory bus for change notifications.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
