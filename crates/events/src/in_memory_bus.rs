//! In-memory event bus for a single-threaded host.

use std::cell::RefCell;
use std::sync::mpsc;

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InMemoryBusError {
    /// `publish` was re-entered while already fanning out a message.
    #[error("event bus is already publishing")]
    Reentrant,
}

/// In-memory pub/sub bus.
///
/// - No IO, no threads
/// - Fan-out to every live subscription
/// - Dropped subscriptions are pruned on the next publish
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: RefCell<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscriptions still registered (including any dropped since
    /// the last publish).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self
            .subscribers
            .try_borrow_mut()
            .map_err(|_| InMemoryBusError::Reentrant)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(message.clone()).is_ok());

        tracing::trace!(subscribers = subs.len(), "published message");
        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.borrow_mut().push(tx);
        Subscription::new(rx)
    }
}
