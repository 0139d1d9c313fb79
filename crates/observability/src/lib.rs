//! Tracing/logging setup shared by every host of the cart widget.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, ParseLogFormatError};

/// Initialize process-wide tracing with the default (JSON) format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::default());
}

/// Initialize process-wide tracing with an explicit output format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}
