use shopcart_core::Aggregate;

/// Execute an aggregate command deterministically (no IO).
///
/// 1. **Decide**: calls `aggregate.handle(command)` to get events (pure, no mutation)
/// 2. **Evolve**: applies each event via `aggregate.apply(event)`
///
/// Returns the applied events. An empty vector means the command was a no-op
/// and the aggregate is untouched; on error nothing is applied either.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
{
    let events = aggregate.handle(command)?;
    for ev in &events {
        aggregate.apply(ev);
    }
    Ok(events)
}
