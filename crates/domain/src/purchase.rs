//! Purchase lines and their reserved snapshots.

use common::ItemId;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A single requested line of a purchase: which item and how many units.
///
/// Quantity must be positive; the inventory ledger rejects zero-quantity
/// lines before any lookup. Duplicate item ids across lines of one batch
/// are legal and are validated cumulatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    /// The catalog item to reserve.
    pub item_id: ItemId,

    /// Units requested.
    pub quantity: u32,
}

impl PurchaseLine {
    /// Creates a new purchase line.
    pub fn new(item_id: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}

/// A purchase line enriched with catalog data and confirmed as reserved.
///
/// Produced only by a successful ledger reservation; the catalog fields
/// are a snapshot taken at the moment stock was decremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedLine {
    /// The reserved catalog item.
    pub item_id: ItemId,

    /// Item name at reservation time.
    pub name: String,

    /// Item description at reservation time.
    pub description: String,

    /// Price per unit at reservation time.
    pub unit_price: Money,

    /// Units reserved.
    pub quantity: u32,
}

impl ReservedLine {
    /// Returns the total price for this line (quantity * unit_price).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}
