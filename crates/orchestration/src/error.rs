//! Orchestration error types.

use common::{CustomerId, ItemId};
use inventory::InventoryError;
use thiserror::Error;

/// Errors that can occur during the order creation workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrchestrationError {
    /// The request failed shape validation before any step ran.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No customer exists with the requested id.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// The customer directory could not be reached.
    #[error("Customer directory error: {0}")]
    Directory(String),

    /// A requested item does not exist in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// A requested quantity exceeds the item's available stock.
    #[error("Not enough stock for item {0}")]
    InsufficientStock(ItemId),

    /// The order or its lines could not be persisted.
    #[error("Order persistence failed: {0}")]
    PersistenceFailure(String),

    /// The payment gateway rejected the payment or could not be reached.
    #[error("Payment failed: {0}")]
    PaymentFailure(String),

    /// Publishing a confirmation failed.
    ///
    /// Returned by [`NotificationPublisher`](crate::NotificationPublisher)
    /// implementations; never surfaced by `create_order`, which treats
    /// the publish step as best-effort.
    #[error("Notification publish failed: {0}")]
    Notification(String),

    /// A workflow step exceeded its configured deadline.
    #[error("Step '{step}' timed out")]
    StepTimeout { step: &'static str },
}

impl From<InventoryError> for OrchestrationError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::ItemNotFound(id) => OrchestrationError::ItemNotFound(id),
            InventoryError::InsufficientStock(id) => OrchestrationError::InsufficientStock(id),
            InventoryError::EmptyBatch | InventoryError::InvalidQuantity(_) => {
                OrchestrationError::InvalidRequest(err.to_string())
            }
        }
    }
}

/// Convenience type alias for orchestration results.
pub type Result<T> = std::result::Result<T, OrchestrationError>;
