//! Widget-level errors.

use thiserror::Error;

use shopcart_core::DomainError;
use shopcart_events::InMemoryBusError;
use shopcart_observability::ParseLogFormatError;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("presentation surface write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode cart view: {0}")]
    Json(#[from] serde_json::Error),

    /// The cart changed, but its events could not be published.
    #[error("cart changed but change notification failed: {0}")]
    Bus(#[from] InMemoryBusError),

    /// The cart changed and its events were published, but the presenter
    /// failed. Call `CartWidget::refresh` to render again.
    #[error("cart changed but the surface was not refreshed: {0}")]
    StaleSurface(#[source] Box<WidgetError>),

    #[error("configuration error: {0}")]
    Config(String),
}

impl WidgetError {
    /// Whether the mutation that produced this error was still applied.
    pub fn cart_changed(&self) -> bool {
        matches!(self, WidgetError::Bus(_) | WidgetError::StaleSurface(_))
    }
}

impl From<ParseLogFormatError> for WidgetError {
    fn from(err: ParseLogFormatError) -> Self {
        WidgetError::Config(err.to_string())
    }
}
