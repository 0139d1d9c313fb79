//! Event publishing/subscription abstraction (mechanics only).
//!
//! A subscriber gets a copy of every message published after it subscribed
//! (broadcast semantics). Delivery is synchronous with `publish`: by the time
//! `publish` returns, each live subscription holds the message in its queue.

use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to an event stream.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// widget.add_item(id, 1)?;
/// for envelope in subscription.drain() {
///     badge.update(envelope.payload());
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Take every message queued so far, oldest first.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
pub trait EventBus<M> {
    type Error: core::fmt::Debug + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
