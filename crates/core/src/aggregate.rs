//! Aggregate trait for command/event driven domain models.

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` returns events.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Aggregates must not render, log to a surface, or touch IO. They only return
/// events describing what happened; an empty event list means the command was
/// a no-op.
pub trait Aggregate {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Corresponds to the number of events applied since construction.
    fn version(&self) -> u64;

    /// Evolve in-memory state from a single event.
    ///
    /// Implementations should remain deterministic and bump `version()` by one
    /// per applied event.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    ///
    /// This must not mutate state. State evolution is done through `apply`.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;
}
