use serde::{Deserialize, Serialize};

/// Envelope for an event, carrying stream metadata.
///
/// This is the unit handed to subscribers after a mutation.
///
/// Notes:
/// - `sequence_number` is the aggregate version right after the event was
///   applied, so it increases by one per event within a stream.
/// - `payload` is the domain event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    aggregate_type: String,

    /// Monotonically increasing position in the aggregate stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(aggregate_type: impl Into<String>, sequence_number: u64, payload: E) -> Self {
        Self {
            aggregate_type: aggregate_type.into(),
            sequence_number,
            payload,
        }
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
