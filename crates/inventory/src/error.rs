//! Inventory error types.

use common::ItemId;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The reservation batch contained no lines.
    #[error("Reservation batch is empty")]
    EmptyBatch,

    /// A line requested a non-positive quantity.
    #[error("Invalid quantity for item {0}: must be positive")]
    InvalidQuantity(ItemId),

    /// A requested item does not exist in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// A requested quantity exceeds the item's available stock.
    #[error("Not enough stock for item {0}")]
    InsufficientStock(ItemId),
}

/// Convenience type alias for inventory results.
pub type Result<T> = std::result::Result<T, InventoryError>;
